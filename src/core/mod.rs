//! Core domain types for Hangman
//!
//! This module contains the game oracle and the plain types shared by every
//! other layer. Nothing here depends on a dictionary or a guessing strategy.

mod config;
mod error;
mod oracle;
mod status;

pub use config::GameConfig;
pub use error::GameError;
pub use oracle::{HangmanOracle, WordOracle};
pub use status::{GameStatus, GuessResponse};

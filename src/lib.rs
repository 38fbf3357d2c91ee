//! Hangman Solver
//!
//! A Hangman oracle plus letter-guessing strategies that narrow a candidate
//! dictionary from nothing but the masked word.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{GameConfig, HangmanOracle};
//! use hangman_solver::game::GameDriver;
//! use hangman_solver::solver::FrequencyStrategy;
//! use hangman_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_slice(&["hello", "hi", "yes", "please"]);
//! let config = GameConfig::default();
//! let oracle = HangmanOracle::with_secret("hello", &config).unwrap();
//!
//! let outcome = GameDriver::new(oracle, FrequencyStrategy::new(&dictionary), &config)
//!     .play()
//!     .unwrap();
//! assert!(outcome.win);
//! ```

// Core domain types
pub mod core;

// Guessing strategies
pub mod solver;

// Oracle/strategy game loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Word lists for Hangman
//!
//! Provides the `Dictionary` type plus an embedded default list compiled into
//! the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, normalize_word};
pub use embedded::{WORDS, WORDS_COUNT};

//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{Dictionary, WORDS};
use std::fs;
use std::io;
use std::path::Path;

/// Load a line-delimited word list from a file
///
/// Entries that are not plain ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(content.lines()))
}

/// Dictionary built from the embedded word list
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::embedded_dictionary;
/// use hangman_solver::wordlists::WORDS;
///
/// let dictionary = embedded_dictionary();
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::from_slice(WORDS)
}

//! Game configuration

use super::GameError;

/// Tunables for a game session
///
/// Built once at startup (from CLI flags or `Default`) and passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Wrong guesses allowed before the game is lost (default: 6)
    pub max_tries: u32,

    /// Placeholder for unrevealed letters (default: `_`)
    pub mask_char: char,

    /// Reveal fraction at or above which the routing strategy stops consulting
    /// its predictor (default: 0.5)
    pub heuristic_threshold: f64,

    /// Shortest dictionary word kept when loading (default: 3)
    pub min_word_len: usize,

    /// Longest dictionary word kept when loading (default: 15)
    pub max_word_len: usize,

    /// Seed the candidate pool with same-length words only (default: true)
    pub match_word_length: bool,

    /// Driver refuses to forward letters the oracle has already seen (default: true)
    pub guard_repeats: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: 6,
            mask_char: '_',
            heuristic_threshold: 0.5,
            min_word_len: 3,
            max_word_len: 15,
            match_word_length: true,
            guard_repeats: true,
        }
    }
}

impl GameConfig {
    /// Check every field is in range
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_tries == 0 {
            return Err(GameError::InvalidConfig(
                "max_tries must be positive".to_string(),
            ));
        }
        if self.mask_char.is_alphanumeric() {
            return Err(GameError::InvalidConfig(format!(
                "mask character {:?} must not be a letter or digit",
                self.mask_char
            )));
        }
        if !(0.0..=1.0).contains(&self.heuristic_threshold) {
            return Err(GameError::InvalidConfig(format!(
                "heuristic_threshold {} must be within [0, 1]",
                self.heuristic_threshold
            )));
        }
        if self.min_word_len == 0 || self.min_word_len > self.max_word_len {
            return Err(GameError::InvalidConfig(format!(
                "word length bounds {}..={} are empty",
                self.min_word_len, self.max_word_len
            )));
        }
        Ok(())
    }
}

//! Error type shared by the oracle, strategies and driver

use thiserror::Error;

/// Everything that can go wrong while setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A guess was not exactly one character. Nothing was mutated.
    #[error("guess must be exactly one character, got {0:?}")]
    InvalidInput(String),

    /// A strategy produced a letter it had already guessed
    #[error("letter '{0}' was already guessed")]
    RepeatedGuess(char),

    /// No unguessed letter is left, even after resetting the candidate pool
    #[error("no unguessed letter remains for a word of length {0}")]
    ExhaustedCandidates(usize),

    /// A secret word was requested from an empty dictionary
    #[error("dictionary has no words to draw a secret from")]
    EmptyDictionary,

    /// An explicit secret word cannot be played
    #[error("invalid secret word {word:?}: {reason}")]
    InvalidSecret { word: String, reason: &'static str },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Whether the caller may keep playing after this error
    ///
    /// Repeated guesses are strategy-local defects; everything else means the
    /// input or the setup must change first.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RepeatedGuess(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_quotes_the_guess() {
        let err = GameError::InvalidInput("ab".to_string());
        assert_eq!(
            err.to_string(),
            "guess must be exactly one character, got \"ab\""
        );
    }

    #[test]
    fn only_repeated_guess_is_recoverable() {
        assert!(GameError::RepeatedGuess('e').is_recoverable());
        assert!(!GameError::ExhaustedCandidates(5).is_recoverable());
        assert!(!GameError::EmptyDictionary.is_recoverable());
        assert!(!GameError::InvalidInput(String::new()).is_recoverable());
    }
}

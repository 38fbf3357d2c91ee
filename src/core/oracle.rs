//! The oracle: holds the secret word and judges letter guesses
//!
//! The oracle is the single authority on which letters are correct, what the
//! masked word looks like and whether the game is over. Status is never
//! stored; it is derived from the remaining tries and the revealed positions
//! every time it is asked for.

use super::{GameConfig, GameError, GameStatus, GuessResponse};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

/// Capability exposed by anything that can referee a game
pub trait WordOracle {
    /// Submit a one-character guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` when `input` is not exactly one
    /// character. No state changes in that case.
    fn guess(&mut self, input: &str) -> Result<GuessResponse, GameError>;

    /// Current status, derived from the oracle's fields
    fn status(&self) -> GameStatus;

    /// The secret with unrevealed positions replaced by the mask character
    fn masked_word(&self) -> String;

    /// Every distinct letter guessed so far, correct or not
    fn guessed_letters(&self) -> BTreeSet<char>;

    /// Number of distinct correct letters
    fn letters_found(&self) -> usize;

    /// Wrong guesses still allowed
    fn tries_remaining(&self) -> u32;

    /// Guesses accepted so far
    fn num_tries(&self) -> u32;

    /// Placeholder used for unrevealed letters
    fn mask_char(&self) -> char;
}

/// In-memory oracle for a single game
#[derive(Debug, Clone)]
pub struct HangmanOracle {
    secret: String,
    letters: Vec<char>,
    revealed: Vec<char>,
    valid: BTreeSet<char>,
    invalid: BTreeSet<char>,
    mask_char: char,
    max_tries: u32,
    tries_remaining: u32,
    num_tries: u32,
}

impl HangmanOracle {
    /// Create an oracle for an explicit secret word
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the word is empty or contains the
    /// mask character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GameConfig, HangmanOracle, WordOracle};
    ///
    /// let oracle = HangmanOracle::with_secret("hello", &GameConfig::default()).unwrap();
    /// assert_eq!(oracle.masked_word(), "_____");
    /// ```
    pub fn with_secret(secret: impl Into<String>, config: &GameConfig) -> Result<Self, GameError> {
        let secret: String = secret.into();

        if secret.is_empty() {
            return Err(GameError::InvalidSecret {
                word: secret,
                reason: "word is empty",
            });
        }
        if secret.contains(config.mask_char) {
            return Err(GameError::InvalidSecret {
                word: secret,
                reason: "word contains the mask character",
            });
        }

        let letters: Vec<char> = secret.chars().collect();
        let revealed = vec![config.mask_char; letters.len()];

        Ok(Self {
            secret,
            letters,
            revealed,
            valid: BTreeSet::new(),
            invalid: BTreeSet::new(),
            mask_char: config.mask_char,
            max_tries: config.max_tries,
            tries_remaining: config.max_tries,
            num_tries: 0,
        })
    }

    /// Create an oracle with a secret drawn from `dictionary`
    ///
    /// The random source is supplied by the caller so games can be replayed
    /// from a seed.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if there is nothing to draw.
    pub fn random<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = dictionary.choose(rng).ok_or(GameError::EmptyDictionary)?;
        Self::with_secret(secret, config)
    }

    /// Judge a single letter
    ///
    /// Once the game has failed this is a no-op returning the secret.
    pub fn guess_letter(&mut self, letter: char) -> GuessResponse {
        if self.status() == GameStatus::Failed {
            return GuessResponse {
                word: self.secret.clone(),
                status: GameStatus::Failed,
                correct: false,
            };
        }

        self.num_tries += 1;

        let mut correct = false;
        for (idx, _) in self.letters.iter().enumerate().filter(|&(_, &c)| c == letter) {
            self.revealed[idx] = letter;
            correct = true;
        }

        if correct {
            self.valid.insert(letter);
            debug!(%letter, masked = %self.masked_word(), "correct guess");
        } else {
            self.invalid.insert(letter);
            self.tries_remaining = self.tries_remaining.saturating_sub(1);
            debug!(%letter, tries_remaining = self.tries_remaining, "incorrect guess");
        }

        let status = self.status();
        let word = if status == GameStatus::Failed {
            self.secret.clone()
        } else {
            self.masked_word()
        };

        GuessResponse {
            word,
            status,
            correct,
        }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Number of characters in the secret
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.letters.len()
    }

    /// Tries the game started with
    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Letters guessed that are in the secret
    #[must_use]
    pub const fn valid_letters(&self) -> &BTreeSet<char> {
        &self.valid
    }

    /// Letters guessed that are not in the secret
    #[must_use]
    pub const fn invalid_letters(&self) -> &BTreeSet<char> {
        &self.invalid
    }
}

impl WordOracle for HangmanOracle {
    fn guess(&mut self, input: &str) -> Result<GuessResponse, GameError> {
        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(GameError::InvalidInput(input.to_string()));
        };

        Ok(self.guess_letter(letter))
    }

    fn status(&self) -> GameStatus {
        if self.tries_remaining == 0 {
            GameStatus::Failed
        } else if self.revealed == self.letters {
            GameStatus::Success
        } else {
            GameStatus::Ongoing
        }
    }

    fn masked_word(&self) -> String {
        self.revealed.iter().collect()
    }

    fn guessed_letters(&self) -> BTreeSet<char> {
        self.valid.union(&self.invalid).copied().collect()
    }

    fn letters_found(&self) -> usize {
        self.valid.len()
    }

    fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    fn num_tries(&self) -> u32 {
        self.num_tries
    }

    fn mask_char(&self) -> char {
        self.mask_char
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn oracle() -> HangmanOracle {
        let config = GameConfig {
            max_tries: 4,
            mask_char: '+',
            ..GameConfig::default()
        };
        HangmanOracle::with_secret("hello", &config).unwrap()
    }

    fn masked(prefix: &str) -> String {
        format!("{prefix}{}", "+".repeat(5 - prefix.len()))
    }

    #[test]
    fn starts_fully_masked() {
        let oracle = oracle();
        assert_eq!(oracle.masked_word(), "+++++");
        assert_eq!(oracle.status(), GameStatus::Ongoing);
        assert_eq!(oracle.tries_remaining(), 4);
        assert_eq!(oracle.num_tries(), 0);
        assert!(oracle.guessed_letters().is_empty());
    }

    #[test]
    fn all_incorrect_fail() {
        let mut oracle = oracle();

        let mut last = None;
        for letter in ["a", "b", "c", "d"] {
            last = Some(oracle.guess(letter).unwrap());
        }
        let last = last.unwrap();

        assert_eq!(last.word, "hello");
        assert_eq!(last.status, GameStatus::Failed);
        assert_eq!(oracle.masked_word(), "+++++");
        assert_eq!(oracle.status(), GameStatus::Failed);
        assert_eq!(oracle.num_tries(), 4);
        assert_eq!(oracle.tries_remaining(), 0);
    }

    #[test]
    fn all_incorrect_ongoing() {
        let mut oracle = oracle();

        let mut last = None;
        for letter in ["a", "b", "c"] {
            last = Some(oracle.guess(letter).unwrap());
        }
        let last = last.unwrap();

        assert_eq!(last.word, "+++++");
        assert_eq!(last.status, GameStatus::Ongoing);
        assert_eq!(oracle.num_tries(), 3);
        assert_eq!(oracle.tries_remaining(), 1);
    }

    #[test]
    fn all_correct_wins() {
        let mut oracle = oracle();

        let steps = [
            ("h", "h", GameStatus::Ongoing),
            ("e", "he", GameStatus::Ongoing),
            ("l", "hell", GameStatus::Ongoing),
            ("o", "hello", GameStatus::Success),
        ];

        for (letter, prefix, status) in steps {
            let response = oracle.guess(letter).unwrap();
            assert_eq!(response.word, masked(prefix));
            assert_eq!(response.status, status);
            assert!(response.correct);
        }

        assert_eq!(oracle.masked_word(), "hello");
        assert_eq!(oracle.num_tries(), 4);
        assert_eq!(oracle.tries_remaining(), 4);
        assert_eq!(oracle.letters_found(), 4);
    }

    #[test]
    fn mixed_guesses_win() {
        let mut oracle = oracle();

        let steps = [
            ("h", "h"),
            ("e", "he"),
            ("a", "he"),
            ("b", "he"),
            ("c", "he"),
            ("l", "hell"),
            ("o", "hello"),
        ];

        for (letter, prefix) in steps {
            let response = oracle.guess(letter).unwrap();
            assert_eq!(response.word, masked(prefix));
        }

        assert_eq!(oracle.status(), GameStatus::Success);
        assert_eq!(oracle.num_tries(), 7);
        assert_eq!(oracle.tries_remaining(), 1);
    }

    #[test]
    fn mixed_guesses_fail_then_stay_failed() {
        let mut oracle = oracle();

        let steps = [
            ("h", "h", GameStatus::Ongoing),
            ("e", "he", GameStatus::Ongoing),
            ("a", "he", GameStatus::Ongoing),
            ("b", "he", GameStatus::Ongoing),
            ("c", "he", GameStatus::Ongoing),
            ("d", "hello", GameStatus::Failed),
            ("l", "hello", GameStatus::Failed),
            ("o", "hello", GameStatus::Failed),
        ];

        for (letter, word, status) in steps {
            let response = oracle.guess(letter).unwrap();
            let expected = if status == GameStatus::Failed {
                word.to_string()
            } else {
                masked(word)
            };
            assert_eq!(response.word, expected);
            assert_eq!(response.status, status);
        }

        assert_eq!(oracle.num_tries(), 6);
        assert_eq!(oracle.tries_remaining(), 0);
        assert_eq!(oracle.masked_word(), "he+++");
    }

    #[test]
    fn multi_character_guess_rejected_without_mutation() {
        let mut oracle = oracle();

        assert_eq!(
            oracle.guess("he"),
            Err(GameError::InvalidInput("he".to_string()))
        );
        assert!(matches!(oracle.guess(""), Err(GameError::InvalidInput(_))));
        assert_eq!(oracle.num_tries(), 0);
        assert_eq!(oracle.tries_remaining(), 4);
    }

    #[test]
    fn repeated_wrong_guess_costs_again() {
        let mut oracle = oracle();
        oracle.guess_letter('z');
        oracle.guess_letter('z');

        assert_eq!(oracle.tries_remaining(), 2);
        assert_eq!(oracle.num_tries(), 2);
        assert_eq!(oracle.guessed_letters().len(), 1);
    }

    #[test]
    fn valid_and_invalid_sets_are_disjoint() {
        let mut oracle = oracle();
        for letter in ['h', 'x', 'l', 'q'] {
            oracle.guess_letter(letter);
        }

        assert!(oracle.valid_letters().is_disjoint(oracle.invalid_letters()));
        assert_eq!(
            oracle.guessed_letters().into_iter().collect::<String>(),
            "hlqx"
        );
    }

    #[test]
    fn secret_with_mask_char_rejected() {
        let result = HangmanOracle::with_secret("a_b", &GameConfig::default());
        assert!(matches!(result, Err(GameError::InvalidSecret { .. })));

        let result = HangmanOracle::with_secret("", &GameConfig::default());
        assert!(matches!(result, Err(GameError::InvalidSecret { .. })));
    }

    #[test]
    fn random_draw_is_reproducible_from_seed() {
        let dictionary = Dictionary::from_slice(&["apple", "banana", "cherry", "damson"]);
        let config = GameConfig::default();

        let first = HangmanOracle::random(&dictionary, &config, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let second = HangmanOracle::random(&dictionary, &config, &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(first.secret(), second.secret());
        assert!(dictionary.words().contains(&first.secret().to_string()));
    }

    #[test]
    fn random_draw_from_empty_dictionary_fails() {
        let dictionary = Dictionary::from_slice(&[]);
        let result =
            HangmanOracle::random(&dictionary, &GameConfig::default(), &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::EmptyDictionary)));
    }
}

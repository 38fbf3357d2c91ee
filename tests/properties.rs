//! Property-based tests for the oracle and the candidate filter.

use hangman_solver::core::{GameConfig, GameStatus, HangmanOracle, WordOracle};
use hangman_solver::solver::CandidateFilter;
use hangman_solver::wordlists::Dictionary;
use proptest::prelude::*;
use std::collections::BTreeSet;

const WORDS: &[&str] = &[
    "hello", "help", "yellow", "world", "hangman", "oracle", "letter", "banana", "cabana",
    "bandana", "rust", "crate", "trait", "borrow", "mask", "guess", "tries", "apple",
];

fn letters() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..40)
}

fn oracle(secret: &str, max_tries: u32) -> HangmanOracle {
    let config = GameConfig {
        max_tries,
        ..GameConfig::default()
    };
    HangmanOracle::with_secret(secret, &config).unwrap()
}

// =============================================================================
// Mask Reconstruction
// =============================================================================

proptest! {
    /// The masked word always has the secret's length and hides exactly the
    /// positions whose letter has not been guessed correctly
    #[test]
    fn prop_mask_matches_guesses(secret in "[a-z]{1,12}", guesses in letters(), tries in 1u32..10) {
        let mut oracle = oracle(&secret, tries);

        for letter in guesses {
            oracle.guess_letter(letter);

            let masked: Vec<char> = oracle.masked_word().chars().collect();
            prop_assert_eq!(masked.len(), secret.chars().count());

            for (shown, actual) in masked.iter().zip(secret.chars()) {
                if oracle.valid_letters().contains(&actual) {
                    prop_assert_eq!(*shown, actual);
                } else {
                    prop_assert_eq!(*shown, '_');
                }
            }
        }
    }
}

// =============================================================================
// Tries Budget
// =============================================================================

proptest! {
    /// Tries drop by one per wrong guess and never otherwise
    #[test]
    fn prop_tries_monotonic(secret in "[a-z]{1,12}", guesses in letters(), tries in 1u32..10) {
        let mut oracle = oracle(&secret, tries);

        for letter in guesses {
            let before = oracle.tries_remaining();
            let was_failed = oracle.status() == GameStatus::Failed;
            let response = oracle.guess_letter(letter);
            let after = oracle.tries_remaining();

            prop_assert!(after <= before);
            if was_failed {
                prop_assert_eq!(after, before);
            } else if secret.contains(letter) {
                prop_assert!(response.correct);
                prop_assert_eq!(after, before);
            } else {
                prop_assert!(!response.correct);
                prop_assert_eq!(after, before - 1);
            }
        }
    }

    /// Once failed, every guess answers the secret and changes nothing
    #[test]
    fn prop_failed_is_terminal(secret in "[a-m]{1,8}", extra in letters()) {
        let mut oracle = oracle(&secret, 3);
        for letter in ['x', 'y', 'z'] {
            oracle.guess_letter(letter);
        }
        prop_assert_eq!(oracle.status(), GameStatus::Failed);

        let guessed = oracle.guessed_letters();
        let num_tries = oracle.num_tries();

        for letter in extra {
            let response = oracle.guess_letter(letter);
            prop_assert_eq!(&response.word, &secret);
            prop_assert_eq!(response.status, GameStatus::Failed);
            prop_assert!(!response.correct);
        }

        prop_assert_eq!(oracle.guessed_letters(), guessed);
        prop_assert_eq!(oracle.num_tries(), num_tries);
    }
}

// =============================================================================
// Candidate Pool
// =============================================================================

proptest! {
    /// Observing a real game never grows the pool and never drops the secret
    #[test]
    fn prop_pool_shrinks_around_secret(idx in 0..WORDS.len(), guesses in letters()) {
        let dictionary = Dictionary::from_slice(WORDS);
        let secret = WORDS[idx];
        let mut oracle = oracle(secret, 6);
        let mut filter = CandidateFilter::new(&dictionary, true);
        filter.observe(&oracle.masked_word());

        let mut seen = BTreeSet::new();
        for letter in guesses {
            if oracle.status().is_terminal() || !seen.insert(letter) {
                continue;
            }

            let before = filter.len();
            filter.set_last_guess(letter);
            oracle.guess_letter(letter);
            filter.observe(&oracle.masked_word());

            prop_assert!(filter.len() <= before);
            prop_assert!(filter.pool().contains(&secret));
        }
    }
}

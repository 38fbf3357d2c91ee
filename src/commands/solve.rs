//! Word solving command
//!
//! Plays one game against a chosen (or randomly drawn) secret word.

use crate::core::GameError;
use crate::game::GameOutcome;
use crate::solver::Solver;
use crate::wordlists::normalize_word;
use rand::Rng;
use tracing::warn;

/// Play one game with the given solver
///
/// A provided `secret` is trimmed and lowercased first. Secrets outside the
/// dictionary are allowed; the strategy then has to lean on its fallbacks.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a plain ASCII word
/// - No secret was given and the dictionary is empty
/// - The strategy runs out of letters or keeps repeating itself
pub fn solve_word<R: Rng + ?Sized>(
    solver: &Solver<'_>,
    secret: Option<&str>,
    rng: &mut R,
) -> Result<GameOutcome, GameError> {
    let secret = match secret {
        Some(raw) => Some(normalize_word(raw).ok_or_else(|| GameError::InvalidSecret {
            word: raw.to_string(),
            reason: "must contain only the letters a-z",
        })?),
        None => None,
    };

    if let Some(word) = &secret {
        if !solver.dictionary().words().contains(word) {
            warn!(%word, "secret is not in the dictionary");
        }
    }

    solver.play(secret.as_deref(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::StrategyKind;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&["hello", "hi", "yes", "please", "world"])
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = dictionary();
        let solver = Solver::new(StrategyKind::Frequency, &dictionary, GameConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = solve_word(&solver, Some("  Hello "), &mut rng).unwrap();

        assert!(outcome.win);
        assert_eq!(outcome.word, "hello");
        assert!(!outcome.turns.is_empty());
    }

    #[test]
    fn solve_records_history() {
        let dictionary = dictionary();
        let solver = Solver::new(StrategyKind::Frequency, &dictionary, GameConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = solve_word(&solver, Some("please"), &mut rng).unwrap();

        assert_eq!(outcome.turns.len(), outcome.total_guesses as usize);
        // Tries never go back up
        for pair in outcome.turns.windows(2) {
            assert!(pair[1].tries_remaining <= pair[0].tries_remaining);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = dictionary();
        let solver = Solver::new(StrategyKind::Frequency, &dictionary, GameConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        let result = solve_word(&solver, Some("he11o"), &mut rng);
        assert!(matches!(result, Err(GameError::InvalidSecret { .. })));
    }

    #[test]
    fn solve_random_secret() {
        let dictionary = dictionary();
        let solver = Solver::new(StrategyKind::Routing, &dictionary, GameConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = solve_word(&solver, None, &mut rng).unwrap();
        assert!(outcome.total_guesses > 0);
    }

    #[test]
    fn solve_word_outside_dictionary_still_plays() {
        let dictionary = dictionary();
        let solver = Solver::new(StrategyKind::Frequency, &dictionary, GameConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = solve_word(&solver, Some("zzz"), &mut rng).unwrap();
        assert!(outcome.total_guesses > 0);
    }
}

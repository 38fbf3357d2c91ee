//! Main solver interface
//!
//! A `Solver` owns everything that can be shared between games (the chosen
//! strategy kind, configuration and, for routing, the predictor table) and
//! hands out fresh per-game strategies and oracles.

use super::frequency::FrequencyStrategy;
use super::predictor::{NgramPredictor, PredictorConfig};
use super::routing::RoutingStrategy;
use super::strategy::{StrategyKind, StrategyType};
use crate::core::{GameConfig, GameError, HangmanOracle};
use crate::game::{GameDriver, GameOutcome};
use crate::wordlists::Dictionary;
use rand::Rng;
use tracing::debug;

/// Shared, read-only game factory
///
/// `Solver` is `Sync`, so a single instance can back many parallel games.
#[derive(Debug)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    predictor: Option<NgramPredictor>,
}

impl<'a> Solver<'a> {
    /// Create a solver for `kind` over `dictionary`
    ///
    /// Routing solvers build their n-gram table up front.
    #[must_use]
    pub fn new(kind: StrategyKind, dictionary: &'a Dictionary, config: GameConfig) -> Self {
        let predictor = match kind {
            StrategyKind::Frequency => None,
            StrategyKind::Routing => {
                let predictor = NgramPredictor::from_dictionary(
                    dictionary,
                    config.mask_char,
                    &PredictorConfig::default(),
                );
                debug!(contexts = predictor.len(), "n-gram predictor built");
                Some(predictor)
            }
        };

        Self {
            dictionary,
            config,
            predictor,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        if self.predictor.is_some() {
            StrategyKind::Routing
        } else {
            StrategyKind::Frequency
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh strategy for one game
    #[must_use]
    pub fn strategy(&self) -> StrategyType<'_> {
        let frequency =
            FrequencyStrategy::with_length_matching(self.dictionary, self.config.match_word_length);

        match &self.predictor {
            Some(predictor) => StrategyType::Routing(RoutingStrategy::new(
                frequency,
                predictor,
                self.config.heuristic_threshold,
                self.config.mask_char,
            )),
            None => StrategyType::Frequency(frequency),
        }
    }

    /// A fresh oracle, for `secret` if given or a random dictionary word
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` for an unusable override and
    /// `GameError::EmptyDictionary` when there is nothing to draw from.
    pub fn oracle<R: Rng + ?Sized>(
        &self,
        secret: Option<&str>,
        rng: &mut R,
    ) -> Result<HangmanOracle, GameError> {
        match secret {
            Some(word) => HangmanOracle::with_secret(word, &self.config),
            None => HangmanOracle::random(self.dictionary, &self.config, rng),
        }
    }

    /// Play one complete game
    ///
    /// # Errors
    /// Returns any error from building the oracle or from the game itself.
    pub fn play<R: Rng + ?Sized>(
        &self,
        secret: Option<&str>,
        rng: &mut R,
    ) -> Result<GameOutcome, GameError> {
        let oracle = self.oracle(secret, rng)?;
        GameDriver::new(oracle, self.strategy(), &self.config).play()
    }
}

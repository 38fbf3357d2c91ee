//! Guess selection strategies
//!
//! Defines the `GuessStrategy` trait and the runtime-selectable wrapper.

use super::frequency::FrequencyStrategy;
use super::predictor::NgramPredictor;
use super::routing::RoutingStrategy;
use crate::core::GameError;

/// A strategy that picks the next letter from the masked word alone
pub trait GuessStrategy {
    /// Forget everything about the current game
    fn reset(&mut self);

    /// Choose the next letter to guess given the word as currently revealed
    ///
    /// # Errors
    /// Returns `GameError::ExhaustedCandidates` when no untried letter is
    /// left, or `GameError::RepeatedGuess` if the strategy's own bookkeeping
    /// produced a letter it had already used.
    fn next_guess(&mut self, masked_word: &str) -> Result<char, GameError>;
}

impl<S: GuessStrategy + ?Sized> GuessStrategy for &mut S {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn next_guess(&mut self, masked_word: &str) -> Result<char, GameError> {
        (**self).next_guess(masked_word)
    }
}

/// Which strategy to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Most frequent letter over the narrowing pool (default)
    #[default]
    Frequency,
    /// Predictor queue while the word is mostly hidden, then frequency
    Routing,
}

impl StrategyKind {
    /// Parse a strategy name
    ///
    /// Supported names: "frequency", "heuristic", "routing", "predictor", "ngram".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "routing" | "predictor" | "ngram" => Self::Routing,
            _ => Self::Frequency,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Routing => "routing",
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType<'a> {
    Frequency(FrequencyStrategy<'a>),
    Routing(RoutingStrategy<'a, &'a NgramPredictor>),
}

impl StrategyType<'_> {
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Frequency(_) => StrategyKind::Frequency,
            Self::Routing(_) => StrategyKind::Routing,
        }
    }

    /// The frequency strategy underneath, for pool inspection
    #[must_use]
    pub const fn frequency(&self) -> &FrequencyStrategy<'_> {
        match self {
            Self::Frequency(s) => s,
            Self::Routing(s) => s.frequency(),
        }
    }
}

impl GuessStrategy for StrategyType<'_> {
    fn reset(&mut self) {
        match self {
            Self::Frequency(s) => s.reset(),
            Self::Routing(s) => s.reset(),
        }
    }

    fn next_guess(&mut self, masked_word: &str) -> Result<char, GameError> {
        match self {
            Self::Frequency(s) => s.next_guess(masked_word),
            Self::Routing(s) => s.next_guess(masked_word),
        }
    }
}

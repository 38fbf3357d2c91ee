//! Routing strategy: predictor and frequency blend
//!
//! While most of the word is still hidden, the strategy intersects the
//! predictor's ranked letters with the pool's top letters and drains that
//! queue first. Once enough of the word is revealed it defers entirely to the
//! embedded `FrequencyStrategy`.

use super::frequency::FrequencyStrategy;
use super::predictor::{LetterPredictor, PredictorConfig, ranked_predictions};
use super::strategy::GuessStrategy;
use crate::core::GameError;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

/// Number of top pool letters the predictor's answers are intersected with
const TOP_POOL_LETTERS: usize = 3;

/// Where the last guess came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    Frequency,
    Predictor,
}

/// Fraction of positions in `masked` that are no longer the mask
///
/// An empty word counts as fully revealed.
///
/// # Examples
/// ```
/// use hangman_solver::solver::routing::reveal_fraction;
///
/// assert!((reveal_fraction("he___", '_') - 0.4).abs() < 1e-9);
/// assert!((reveal_fraction("_____", '_')).abs() < 1e-9);
/// ```
#[must_use]
pub fn reveal_fraction(masked: &str, mask: char) -> f64 {
    let len = masked.chars().count();
    if len == 0 {
        return 1.0;
    }

    let hidden = masked.chars().filter(|&c| c == mask).count();
    1.0 - hidden as f64 / len as f64
}

/// Frequency strategy that consults a letter predictor early in the game
#[derive(Debug, Clone)]
pub struct RoutingStrategy<'a, P> {
    frequency: FrequencyStrategy<'a>,
    predictor: P,
    contexts: PredictorConfig,
    pending: VecDeque<char>,
    threshold: f64,
    mask: char,
    last_source: Option<GuessSource>,
}

impl<'a, P: LetterPredictor> RoutingStrategy<'a, P> {
    /// Wrap `frequency` with a predictor
    ///
    /// `threshold` is the reveal fraction at or above which the predictor is
    /// no longer consulted.
    #[must_use]
    pub fn new(frequency: FrequencyStrategy<'a>, predictor: P, threshold: f64, mask: char) -> Self {
        Self {
            frequency,
            predictor,
            contexts: PredictorConfig::default(),
            pending: VecDeque::new(),
            threshold,
            mask,
            last_source: None,
        }
    }

    /// Use a different context-window shape
    #[must_use]
    pub const fn with_contexts(mut self, contexts: PredictorConfig) -> Self {
        self.contexts = contexts;
        self
    }

    /// Rebuild the predictor queue from the current pool
    fn refresh_pending(&mut self, masked: &str) {
        let top: FxHashSet<char> = self
            .frequency
            .top_letters(TOP_POOL_LETTERS)
            .into_iter()
            .collect();

        let predicted = ranked_predictions(
            &self.predictor,
            masked,
            self.mask,
            &self.contexts,
            self.frequency.guessed_letters(),
        );

        self.pending = predicted
            .into_iter()
            .filter(|letter| top.contains(letter))
            .collect();

        debug!(pending = ?self.pending, "predictor queue refreshed");
    }

    /// Letters queued from the predictor, next first
    #[must_use]
    pub const fn pending(&self) -> &VecDeque<char> {
        &self.pending
    }

    /// Source of the most recent guess
    #[must_use]
    pub const fn last_source(&self) -> Option<GuessSource> {
        self.last_source
    }

    /// The embedded frequency strategy
    #[must_use]
    pub const fn frequency(&self) -> &FrequencyStrategy<'a> {
        &self.frequency
    }
}

impl<P: LetterPredictor> GuessStrategy for RoutingStrategy<'_, P> {
    fn reset(&mut self) {
        self.frequency.reset();
        self.pending.clear();
        self.last_source = None;
    }

    fn next_guess(&mut self, masked_word: &str) -> Result<char, GameError> {
        if reveal_fraction(masked_word, self.mask) >= self.threshold {
            self.last_source = Some(GuessSource::Frequency);
            return self.frequency.next_guess(masked_word);
        }

        if self.frequency.observe(masked_word) {
            self.refresh_pending(masked_word);
        }

        while let Some(letter) = self.pending.pop_front() {
            match self.frequency.commit(letter) {
                Ok(()) => {
                    self.last_source = Some(GuessSource::Predictor);
                    debug!(%letter, "guess from predictor");
                    return Ok(letter);
                }
                // Already logged by `commit`; try the next queued letter
                Err(GameError::RepeatedGuess(_)) => {}
                Err(err) => return Err(err),
            }
        }

        self.last_source = Some(GuessSource::Frequency);
        self.frequency.select(masked_word)
    }
}

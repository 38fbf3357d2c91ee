//! Letter-frequency strategy
//!
//! Guesses the most common letter across the candidate pool that has not been
//! tried yet, narrowing the pool after every observed masked word.

use super::candidates::CandidateFilter;
use super::strategy::GuessStrategy;
use crate::core::GameError;
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Most-frequent-letter strategy over a constraint-narrowed pool
#[derive(Debug, Clone)]
pub struct FrequencyStrategy<'a> {
    filter: CandidateFilter<'a>,
    guessed: FxHashSet<char>,
}

impl<'a> FrequencyStrategy<'a> {
    /// Create a strategy whose pool starts as the whole dictionary
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_length_matching(dictionary, false)
    }

    /// Create a strategy, optionally restricting the pool to the masked
    /// word's length on the first observation
    #[must_use]
    pub fn with_length_matching(dictionary: &'a Dictionary, match_length: bool) -> Self {
        Self {
            filter: CandidateFilter::new(dictionary, match_length),
            guessed: FxHashSet::default(),
        }
    }

    /// Update the pool from a masked word without choosing a letter
    ///
    /// Returns whether the masked word changed since the last observation.
    pub fn observe(&mut self, masked: &str) -> bool {
        self.filter.observe(masked)
    }

    /// Choose and record the next letter from the current pool
    ///
    /// Resets the pool once if it has nothing left to offer, then falls back
    /// to the first untried letter of the alphabet.
    ///
    /// # Errors
    /// Returns `GameError::ExhaustedCandidates` once all of `a..=z` and every
    /// dictionary letter have been tried.
    pub fn select(&mut self, masked: &str) -> Result<char, GameError> {
        let letter = if let Some(letter) = self.suggest() {
            letter
        } else {
            self.filter.reset_pool();
            match self.suggest() {
                Some(letter) => letter,
                None => self.alphabet_fallback(masked)?,
            }
        };

        self.commit(letter)?;
        Ok(letter)
    }

    /// Best untried letter in the current pool, without recording it
    #[must_use]
    pub fn suggest(&self) -> Option<char> {
        self.filter
            .letter_ranking()
            .into_iter()
            .map(|(letter, _)| letter)
            .find(|letter| !self.guessed.contains(letter))
    }

    fn alphabet_fallback(&self, masked: &str) -> Result<char, GameError> {
        let letter = ('a'..='z')
            .find(|letter| !self.guessed.contains(letter))
            .ok_or_else(|| GameError::ExhaustedCandidates(masked.chars().count()))?;

        warn!(%letter, %masked, "dictionary exhausted; falling back to alphabet order");
        Ok(letter)
    }

    /// Record `letter` as guessed and as the letter the next observation
    /// should be judged against
    ///
    /// # Errors
    /// Returns `GameError::RepeatedGuess` (and logs a warning) if the letter
    /// was already guessed. Nothing is recorded in that case.
    pub fn commit(&mut self, letter: char) -> Result<(), GameError> {
        if !self.guessed.insert(letter) {
            warn!(%letter, guessed = ?self.guessed, "letter already guessed");
            return Err(GameError::RepeatedGuess(letter));
        }

        self.filter.set_last_guess(letter);
        debug!(%letter, pool = self.filter.len(), "letter committed");
        Ok(())
    }

    /// The `n` most frequent letters in the pool, guessed or not
    #[must_use]
    pub fn top_letters(&self, n: usize) -> Vec<char> {
        self.filter
            .letter_ranking()
            .into_iter()
            .take(n)
            .map(|(letter, _)| letter)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Letters this strategy has guessed, correct or not
    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// The candidate filter backing this strategy
    #[inline]
    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter<'a> {
        &self.filter
    }
}

impl GuessStrategy for FrequencyStrategy<'_> {
    fn reset(&mut self) {
        self.filter.reset();
        self.guessed.clear();
    }

    fn next_guess(&mut self, masked_word: &str) -> Result<char, GameError> {
        self.observe(masked_word);
        self.select(masked_word)
    }
}

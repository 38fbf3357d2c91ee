//! Turn-by-turn game loop
//!
//! The driver is the only thing that talks to both sides: it shows the
//! strategy the masked word, forwards the chosen letter to the oracle and
//! records what happened.

use crate::core::{GameConfig, GameError, GameStatus, WordOracle};
use crate::solver::GuessStrategy;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Consecutive already-seen letters tolerated before the driver gives up
pub const MAX_REPEAT_RETRIES: usize = 26;

/// What happened on a single turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub letter: char,
    pub correct: bool,
    /// Masked word after the guess (the secret once the game is lost)
    pub word: String,
    pub status: GameStatus,
    pub tries_remaining: u32,
    /// Masked positions in the word the strategy saw before guessing
    pub unrevealed: usize,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOutcome {
    pub win: bool,
    /// Guesses spent, keyed by how many letters were still hidden at the time
    pub guess_tally: BTreeMap<usize, usize>,
    /// Final word reported by the oracle
    pub word: String,
    pub guessed_letters: BTreeSet<char>,
    pub total_guesses: u32,
    pub turns: Vec<TurnRecord>,
}

impl GameOutcome {
    /// Number of turns whose guess was wrong
    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.turns.iter().filter(|turn| !turn.correct).count()
    }
}

/// Drives one game between an oracle and a strategy
pub struct GameDriver<O, S> {
    oracle: O,
    strategy: S,
    guard_repeats: bool,
}

impl<O: WordOracle, S: GuessStrategy> GameDriver<O, S> {
    /// Pair an oracle with a strategy
    ///
    /// The strategy is expected to be fresh (or reset) for this game.
    pub const fn new(oracle: O, strategy: S, config: &GameConfig) -> Self {
        Self {
            oracle,
            strategy,
            guard_repeats: config.guard_repeats,
        }
    }

    /// Ask the strategy for a letter the oracle has not seen yet
    fn choose(&mut self, masked: &str) -> Result<char, GameError> {
        let mut attempts = 0;
        loop {
            let letter = self.strategy.next_guess(masked)?;
            if !self.guard_repeats || !self.oracle.guessed_letters().contains(&letter) {
                return Ok(letter);
            }

            attempts += 1;
            warn!(%letter, attempts, "strategy repeated a guess; asking again");
            if attempts >= MAX_REPEAT_RETRIES {
                return Err(GameError::RepeatedGuess(letter));
            }
        }
    }

    /// Play a single turn
    ///
    /// # Errors
    /// Propagates strategy errors, and `GameError::RepeatedGuess` when the
    /// repeat guard runs out of retries.
    pub fn step(&mut self) -> Result<TurnRecord, GameError> {
        let masked = self.oracle.masked_word();
        let mask = self.oracle.mask_char();
        let unrevealed = masked.chars().filter(|&c| c == mask).count();

        let letter = self.choose(&masked)?;
        let response = self.oracle.guess(letter.encode_utf8(&mut [0; 4]))?;

        let turn = TurnRecord {
            letter,
            correct: response.correct,
            word: response.word,
            status: response.status,
            tries_remaining: self.oracle.tries_remaining(),
            unrevealed,
        };

        debug!(
            %letter,
            correct = turn.correct,
            word = %turn.word,
            tries = turn.tries_remaining,
            "turn played"
        );
        Ok(turn)
    }

    /// Play until the oracle reports a terminal status
    ///
    /// # Errors
    /// Stops at the first error from `step`.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        let mut outcome = GameOutcome::default();

        while !self.oracle.status().is_terminal() {
            let turn = self.step()?;
            *outcome.guess_tally.entry(turn.unrevealed).or_insert(0) += 1;
            outcome.turns.push(turn);
        }

        let status = self.oracle.status();
        outcome.win = status == GameStatus::Success;
        outcome.word = match outcome.turns.last() {
            Some(turn) => turn.word.clone(),
            None => self.oracle.masked_word(),
        };
        outcome.guessed_letters = self.oracle.guessed_letters();
        outcome.total_guesses = self.oracle.num_tries();

        info!(
            win = outcome.win,
            word = %outcome.word,
            guesses = outcome.total_guesses,
            "game finished"
        );
        Ok(outcome)
    }

    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Give back the oracle and strategy
    pub fn into_parts(self) -> (O, S) {
        (self.oracle, self.strategy)
    }
}

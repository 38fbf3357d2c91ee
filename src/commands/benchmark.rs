//! Benchmark command
//!
//! Plays many seeded games against random dictionary words in parallel.

use crate::game::GameOutcome;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    /// Games that stopped on a strategy error instead of a win or loss
    pub errors: usize,
    pub win_rate: f64,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub average_wrong_guesses: f64,
    /// Guess tallies of every finished game, merged
    pub tally: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    fn from_outcomes(outcomes: &[GameOutcome], errors: usize, duration: Duration) -> Self {
        let finished = outcomes.len();
        let wins = outcomes.iter().filter(|outcome| outcome.win).count();
        let total_guesses: usize = outcomes
            .iter()
            .map(|outcome| outcome.total_guesses as usize)
            .sum();
        let wrong_guesses: usize = outcomes.iter().map(GameOutcome::wrong_guesses).sum();

        let mut tally = BTreeMap::new();
        for outcome in outcomes {
            for (&hidden, &count) in &outcome.guess_tally {
                *tally.entry(hidden).or_insert(0) += count;
            }
        }

        let per_game = |total: usize| {
            if finished == 0 {
                0.0
            } else {
                total as f64 / finished as f64
            }
        };

        let total_games = finished + errors;
        let secs = duration.as_secs_f64();

        Self {
            total_games,
            wins,
            errors,
            win_rate: if total_games == 0 {
                0.0
            } else {
                wins as f64 / total_games as f64
            },
            total_guesses,
            average_guesses: per_game(total_guesses),
            average_wrong_guesses: per_game(wrong_guesses),
            tally,
            duration,
            games_per_second: if secs > 0.0 {
                total_games as f64 / secs
            } else {
                0.0
            },
        }
    }
}

fn progress_bar(count: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(count as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    bar.set_style(style);
    bar
}

/// Run `count` games, game `i` drawing its secret from a `StdRng` seeded
/// with `seed + i`
///
/// Results only depend on `seed`, not on how rayon schedules the games.
pub fn run_benchmark(solver: &Solver<'_>, count: usize, seed: u64, show_progress: bool) -> BenchmarkResult {
    let start = Instant::now();
    let bar = progress_bar(count, show_progress);

    let results: Vec<_> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let result = solver.play(None, &mut rng);
            bar.inc(1);
            result
        })
        .collect();

    bar.finish_with_message("Complete!");

    let mut outcomes = Vec::with_capacity(results.len());
    let mut errors = 0;
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                warn!(%err, "benchmark game aborted");
                errors += 1;
            }
        }
    }

    BenchmarkResult::from_outcomes(&outcomes, errors, start.elapsed())
}

//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_mask, tries_bar};
use crate::commands::BenchmarkResult;
use crate::game::GameOutcome;
use colored::Colorize;

/// Print a finished game turn by turn
pub fn print_game_result(outcome: &GameOutcome, max_tries: u32, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word: {}",
        spaced_mask(&outcome.word).to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in outcome.turns.iter().enumerate() {
        let mark = if turn.correct {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            turn.letter.to_string().to_uppercase().bold(),
            mark,
            spaced_mask(&turn.word)
        );

        if verbose {
            println!("  Hidden before: {}", turn.unrevealed);
            println!(
                "  Tries:         {} ({}/{max_tries})",
                tries_bar(turn.tries_remaining, max_tries).red(),
                turn.tries_remaining
            );
        }
    }

    if verbose && !outcome.guess_tally.is_empty() {
        println!("\n📈 {}", "Guesses by hidden letters:".bright_cyan().bold());
        for (hidden, count) in outcome.guess_tally.iter().rev() {
            println!("   {hidden:2} hidden: {count}");
        }
    }

    let guessed: String = outcome.guessed_letters.iter().collect();
    println!("\nLetters tried: {guessed}");

    println!();
    if outcome.win {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                outcome.total_guesses,
                outcome.wrong_guesses()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed after {} guesses", outcome.total_guesses)
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_wrong_guesses).yellow()
    );
    if result.errors > 0 {
        println!(
            "   Aborted games:    {}",
            result.errors.to_string().red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_guesses == 0 {
        return;
    }

    println!("\n📈 {}", "Guesses by hidden letters:".bright_cyan().bold());
    for (hidden, &count) in result.tally.iter().rev() {
        let pct = (count as f64 / result.total_guesses as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {hidden:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}

//! Simple interactive CLI mode
//!
//! Text-based mode where the user referees the game (for example against a
//! remote Hangman service) and types back each new masked word.

use crate::core::GameError;
use crate::output::formatters::spaced_mask;
use crate::solver::{GuessStrategy, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    Quit,
    New,
    /// The last suggestion was wrong; the masked word is unchanged
    Miss,
    Masked(String),
}

/// Check a masked word typed by the user
///
/// The word is lowercased; every character must be `a-z` or `mask`. When
/// `previous` is given the new word must have the same length and keep every
/// letter already revealed.
///
/// # Errors
/// Returns `GameError::InvalidInput` describing the first problem found.
///
/// # Examples
/// ```
/// use hangman_solver::commands::simple::parse_masked_word;
///
/// assert_eq!(parse_masked_word("H_LL_", '_', Some("__ll_")).unwrap(), "h_ll_");
/// assert!(parse_masked_word("h_ll", '_', Some("__ll_")).is_err());
/// ```
pub fn parse_masked_word(
    input: &str,
    mask: char,
    previous: Option<&str>,
) -> Result<String, GameError> {
    let masked = input.trim().to_lowercase();

    if masked.is_empty() {
        return Err(GameError::InvalidInput("masked word is empty".to_string()));
    }

    if let Some(bad) = masked
        .chars()
        .find(|&c| c != mask && !c.is_ascii_lowercase())
    {
        return Err(GameError::InvalidInput(format!(
            "unexpected character '{bad}' (use a-z and '{mask}')"
        )));
    }

    if let Some(previous) = previous {
        if previous.chars().count() != masked.chars().count() {
            return Err(GameError::InvalidInput(format!(
                "expected {} characters, got {}",
                previous.chars().count(),
                masked.chars().count()
            )));
        }

        let lost = previous
            .chars()
            .zip(masked.chars())
            .any(|(before, after)| before != mask && before != after);
        if lost {
            return Err(GameError::InvalidInput(format!(
                "'{masked}' hides letters already shown in '{previous}'"
            )));
        }
    }

    Ok(masked)
}

/// Interpret a line of input as a command or a masked word
///
/// # Errors
/// Returns `GameError::InvalidInput` for a malformed masked word.
pub fn parse_input(
    input: &str,
    mask: char,
    previous: Option<&str>,
) -> Result<SimpleInput, GameError> {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(SimpleInput::Quit),
        "new" | "n" => Ok(SimpleInput::New),
        "miss" | "m" | "no" => Ok(SimpleInput::Miss),
        _ => parse_masked_word(input, mask, previous).map(SimpleInput::Masked),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// strategy runs out of letters.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(solver: &Solver<'_>) -> Result<()> {
    let config = solver.config();
    let mask = config.mask_char;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Hangman Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest letters; you tell me what the word looks like now.");
    println!("  - Type the masked word, using '{mask}' for hidden letters");
    println!("  - Type 'miss' if my letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut strategy = solver.strategy();

    'game: loop {
        strategy.reset();
        let mut misses = 0;

        let mut masked = loop {
            let example = mask.to_string().repeat(5);
            let input = get_user_input(&format!("Starting word (e.g. {example})"))?;
            match parse_input(&input, mask, None) {
                Ok(SimpleInput::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Ok(SimpleInput::Masked(word)) => break word,
                Ok(SimpleInput::New | SimpleInput::Miss) => {}
                Err(err) => println!("❌ {err}\n"),
            }
        };

        loop {
            if !masked.contains(mask) {
                println!("\n{}", format!("🎉 Solved: {masked}").bright_green().bold());
                continue 'game;
            }
            if misses >= config.max_tries {
                println!("\n{}", "❌ Out of tries".red().bold());
                continue 'game;
            }

            let letter = strategy.next_guess(&masked)?;

            println!("────────────────────────────────────────────────────────────");
            println!(
                "Word: {}   Misses: {misses}/{}",
                spaced_mask(&masked).bright_white().bold(),
                config.max_tries
            );
            println!("📊 Suggested letter: {}", letter.to_string().bright_yellow().bold());

            loop {
                let input = get_user_input("New masked word, 'miss', or command")?;
                match parse_input(&input, mask, Some(&masked)) {
                    Ok(SimpleInput::Quit) => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    Ok(SimpleInput::New) => {
                        println!("\n🔄 New game started!\n");
                        continue 'game;
                    }
                    Ok(SimpleInput::Miss) => {
                        misses += 1;
                        break;
                    }
                    Ok(SimpleInput::Masked(word)) => {
                        if word == masked {
                            misses += 1;
                        }
                        masked = word;
                        break;
                    }
                    Err(err) => println!("❌ {err}\n"),
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert_eq!(parse_input("quit", '_', None), Ok(SimpleInput::Quit));
        assert_eq!(parse_input(" NEW ", '_', None), Ok(SimpleInput::New));
        assert_eq!(parse_input("miss", '_', Some("___")), Ok(SimpleInput::Miss));
    }

    #[test]
    fn masked_word_is_lowercased() {
        assert_eq!(
            parse_input("_E___", '_', Some("_____")),
            Ok(SimpleInput::Masked("_e___".to_string()))
        );
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(matches!(
            parse_masked_word("h3ll_", '_', None),
            Err(GameError::InvalidInput(_))
        ));
        assert!(parse_masked_word("h*ll*", '_', None).is_err());
        assert!(parse_masked_word("h*ll*", '*', None).is_ok());
    }

    #[test]
    fn rejects_length_change() {
        assert!(parse_masked_word("____", '_', Some("_____")).is_err());
    }

    #[test]
    fn rejects_hiding_revealed_letters() {
        assert!(parse_masked_word("_____", '_', Some("_e___")).is_err());
        assert!(parse_masked_word("_a___", '_', Some("_e___")).is_err());
        assert!(parse_masked_word("he___", '_', Some("_e___")).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(parse_masked_word("   ", '_', None).is_err());
    }
}

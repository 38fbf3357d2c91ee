//! TUI application state and logic

use crate::core::{GameConfig, GameError, GameStatus, HangmanOracle, WordOracle};
use crate::solver::{FrequencyStrategy, GuessStrategy};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub oracle: HangmanOracle,
    /// Tracks the game alongside the player to offer hints
    pub strategy: FrequencyStrategy<'a>,
    pub hint: Option<char>,
    pub show_hint: bool,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: char,
    pub correct: bool,
    pub word: String,
    pub pool_before: usize,
    pub pool_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games keyed by how many wrong guesses they took
    pub misses_distribution: BTreeMap<u32, usize>,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` when there is no word to play.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let oracle = HangmanOracle::random(dictionary, &config, &mut rng)?;

        let mut app = Self {
            dictionary,
            strategy: FrequencyStrategy::with_length_matching(dictionary, config.match_word_length),
            config,
            oracle,
            hint: None,
            show_hint: false,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };

        app.start_round();
        app.add_message("Welcome! Type letters to guess the hidden word.", MessageStyle::Info);
        app.add_message("TAB shows a hint, ENTER plays it.", MessageStyle::Info);
        Ok(app)
    }

    /// Reset per-game state around the current oracle
    fn start_round(&mut self) {
        self.strategy.reset();
        self.strategy.observe(&self.oracle.masked_word());
        self.history.clear();
        self.input_mode = InputMode::Guessing;
        self.refresh_hint();
    }

    fn refresh_hint(&mut self) {
        self.hint = self.strategy.suggest().or_else(|| {
            ('a'..='z').find(|letter| !self.strategy.is_guessed(*letter))
        });
    }

    /// Draw a new secret and start over
    pub fn new_game(&mut self) {
        match HangmanOracle::random(self.dictionary, &self.config, &mut self.rng) {
            Ok(oracle) => {
                self.oracle = oracle;
                self.messages.clear();
                self.start_round();
                self.add_message(
                    &format!("New game! The word has {} letters.", self.oracle.word_len()),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Guess `letter` against the hidden word
    pub fn handle_guess(&mut self, letter: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            self.add_message("Letters a-z only!", MessageStyle::Error);
            return;
        }
        if self.oracle.guessed_letters().contains(&letter) {
            self.add_message(
                &format!("Already tried '{}'", letter.to_ascii_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        if let Err(err) = self.strategy.commit(letter) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        let pool_before = self.strategy.filter().len();
        let response = self.oracle.guess_letter(letter);
        self.strategy.observe(&self.oracle.masked_word());
        let pool_after = self.strategy.filter().len();

        debug!(%letter, correct = response.correct, pool_before, pool_after, "player guessed");

        self.history.push(HistoryEntry {
            letter,
            correct: response.correct,
            word: response.word.clone(),
            pool_before,
            pool_after,
        });

        match response.status {
            GameStatus::Success => self.finish(true),
            GameStatus::Failed => self.finish(false),
            GameStatus::Ongoing => {
                if response.correct {
                    self.add_message(
                        &format!("'{}' is in the word!", letter.to_ascii_uppercase()),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!(
                            "No '{}'. {} tries left.",
                            letter.to_ascii_uppercase(),
                            self.oracle.tries_remaining()
                        ),
                        MessageStyle::Error,
                    );
                }
                self.refresh_hint();
            }
        }
    }

    /// Play the current hint, if any
    pub fn play_hint(&mut self) {
        if let Some(letter) = self.hint {
            self.handle_guess(letter);
        }
    }

    fn finish(&mut self, won: bool) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.hint = None;

        let secret = self.oracle.secret().to_uppercase();
        if won {
            self.stats.games_won += 1;
            let misses = self.oracle.max_tries() - self.oracle.tries_remaining();
            *self.stats.misses_distribution.entry(misses).or_insert(0) += 1;

            let celebration = match misses {
                0 => "🎯 FLAWLESS! No wrong guesses! 🌟",
                1 | 2 => "🔥 MAGNIFICENT! 🔥",
                _ => "🎉 SOLVED! 🎉",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message(&format!("The word was {secret}"), MessageStyle::Success);
        } else {
            self.add_message(&format!("Hanged! The word was {secret}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dictionary words still consistent with the board
    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.strategy.filter().len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::GameOver, KeyCode::Char('n') | KeyCode::Enter) => {
                    app.new_game();
                }
                (InputMode::Guessing, KeyCode::Tab) => {
                    app.show_hint = !app.show_hint;
                }
                (InputMode::Guessing, KeyCode::Enter) => {
                    app.play_hint();
                }
                (InputMode::Guessing, KeyCode::Char(c)) => {
                    app.handle_guess(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI rendering with ratatui
//!
//! Visualizations for the Hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::WordOracle;
use crate::output::formatters::{spaced_mask, tries_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Board
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word = if app.input_mode == InputMode::GameOver {
        app.oracle.secret().to_string()
    } else {
        app.oracle.masked_word()
    };

    let missed: String = app.oracle.invalid_letters().iter().collect();

    let mut content = vec![
        Line::from(Span::styled(
            spaced_mask(&word).to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Tries:  "),
            Span::styled(
                tries_bar(app.oracle.tries_remaining(), app.oracle.max_tries()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(format!("Missed: {}", missed.to_uppercase())),
    ];

    if app.show_hint {
        let hint = app
            .hint
            .map_or_else(|| "-".to_string(), |c| c.to_ascii_uppercase().to_string());
        content.push(Line::from(vec![
            Span::raw("Hint:   "),
            Span::styled(
                hint,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.strategy.filter().pool();

    let content = if pool.is_empty() {
        vec![Line::from("No dictionary word fits the board")]
    } else if pool.len() <= 8 && app.show_hint {
        let mut lines = vec![Line::from("Remaining:")];
        for word in pool {
            lines.push(Line::from(format!("  • {}", word.to_uppercase())));
        }
        lines
    } else {
        let top: String = app
            .strategy
            .top_letters(5)
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        vec![
            Line::from(format!("{} candidates remaining", pool.len())),
            Line::from(format!("Most common letters: {top}")),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let mark = if entry.correct { "✓" } else { "✗" };
            let content = format!(
                "{}: {} {} {} [{} → {}]",
                app.history.len() - i,
                entry.letter.to_ascii_uppercase(),
                mark,
                spaced_mask(&entry.word),
                entry.pool_before,
                entry.pool_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Reveal gauge
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_reveal_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_reveal_progress(f: &mut Frame, app: &App, area: Rect) {
    let masked = app.oracle.masked_word();
    let total = masked.chars().count();
    let hidden = masked.chars().filter(|&c| c == app.oracle.mask_char()).count();
    let shown = total - hidden;
    let progress_pct = if total == 0 {
        100
    } else {
        (shown * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Letters Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{shown}/{total} letters | {} candidates remain",
            app.get_candidates_count()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let guessed: String = app
        .oracle
        .guessed_letters()
        .iter()
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let (title, color) = match app.input_mode {
        InputMode::GameOver => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a letter to guess | TAB toggles hint | ENTER plays hint ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(format!("Guessed: {guessed}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.get_candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "ESC: Quit | a-z: Guess | TAB: Hint",
        InputMode::GameOver => "q: Quit | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

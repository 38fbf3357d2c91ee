//! Interactive TUI interface
//!
//! The player guesses letters against a hidden dictionary word while a
//! frequency strategy follows along to offer hints.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};

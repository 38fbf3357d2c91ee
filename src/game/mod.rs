//! Game orchestration
//!
//! Runs an oracle and a strategy against each other until the game ends.

mod driver;

pub use driver::{GameDriver, GameOutcome, MAX_REPEAT_RETRIES, TurnRecord};

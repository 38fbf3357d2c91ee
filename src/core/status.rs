//! Game status and per-guess response

use std::fmt;

/// Where a game stands
///
/// `Success` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Success,
    Failed,
    Ongoing,
}

impl GameStatus {
    /// True for `Success` and `Failed`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// Upper-case label used in console output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Ongoing => "ONGOING",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single guess
///
/// `word` is the masked word, except once the game has failed: then it is the
/// secret itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResponse {
    pub word: String,
    pub status: GameStatus,
    pub correct: bool,
}

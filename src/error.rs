use thiserror::Error;

/// Errors raised by the leaderboard itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("team {slot} is outside 1-{count}")]
    InvalidSlot { slot: usize, count: usize },
}

/// Errors from parsing a typed score command. Every variant is an invalid
/// slot in one form or another; value tokens never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid team: {0}")]
    InvalidSlot(String),

    #[error("Out of range: {slot} (1-{count})")]
    OutOfRange { slot: String, count: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}

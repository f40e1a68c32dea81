//! Row validation failure causes.
//!
//! These never propagate to callers; they are the structured cause carried
//! by the `warn!` diagnostics when a row is dropped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("schema mismatch: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("poll has no options")]
    NoOptions,

    #[error("unknown poll status: {0}")]
    UnknownStatus(u8),

    #[error("winning option {winner} out of range for {options} options")]
    WinnerOutOfRange { winner: u8, options: usize },

    #[error("poll is settled but has no winning option")]
    SettledWithoutWinner,

    #[error("comment text length {0} outside 1..=500")]
    CommentLength(usize),
}

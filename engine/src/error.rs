//! Submission failure taxonomy.
//!
//! Every variant is user-surfaceable; the `Display` strings are the
//! messages shown verbatim in the UI layer.

use thiserror::Error;

/// Failure reported by the external ledger mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("poll has already ended")]
    PollEnded,

    #[error("network error: {0}")]
    Network(String),
}

/// Why a selection or submission was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error("Select an option")]
    NoSelection,

    #[error("Connect your wallet to vote")]
    WalletNotConnected,

    #[error("Enter at least 1 coin")]
    ZeroCoins,

    #[error("Insufficient balance: need {needed_cents}, have {available_cents}")]
    InsufficientBalance {
        needed_cents: u64,
        available_cents: u64,
    },

    #[error("Voting has ended for this poll")]
    PollEnded,

    #[error("This poll has been settled")]
    PollSettled,

    #[error("You cannot vote on your own poll")]
    SelfVote,

    #[error("Option {index} does not exist (poll has {options} options)")]
    InvalidOption { index: usize, options: usize },

    #[error("Transaction failed: {0}")]
    Ledger(#[from] LedgerError),
}

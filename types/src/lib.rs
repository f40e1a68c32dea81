//! Fundamental types for InstinctFi prediction polls.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: wallet addresses, timestamps, polls, votes, user accounts, and
//! notifications.

pub mod address;
pub mod notification;
pub mod poll;
pub mod time;
pub mod user;
pub mod vote;

pub use address::WalletAddress;
pub use notification::{Notification, NotificationKind};
pub use poll::{Poll, PollStatus};
pub use time::Timestamp;
pub use user::UserAccount;
pub use vote::Vote;

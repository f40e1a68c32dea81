//! User-facing notification records.

use crate::WalletAddress;
use serde::{Deserialize, Serialize};

/// The event a notification reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PollEnded,
    RewardAvailable,
    PollVoted,
    RewardClaimed,
    PollSettled,
}

/// One entry in a wallet's notification feed.
///
/// Owned exclusively by the notification store, which caps the feed at the
/// 50 most recent entries, newest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub wallet: WalletAddress,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_id: Option<String>,
    pub read: bool,
    /// Creation time in milliseconds since epoch.
    pub created_at: u64,
}

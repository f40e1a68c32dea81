//! Vote row schema.

use instinct_types::{Vote, WalletAddress};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// A vote row as stored. Only `claimed` is defaulted.
#[derive(Clone, Debug, Deserialize)]
pub struct VoteRow {
    pub poll_id: String,
    pub voter: String,
    pub votes_per_option: Vec<u64>,
    pub total_staked_cents: u64,
    #[serde(default)]
    pub claimed: bool,
}

impl VoteRow {
    pub fn into_vote(self) -> Vote {
        Vote {
            poll_id: self.poll_id,
            voter: WalletAddress::new(self.voter),
            votes_per_option: self.votes_per_option,
            total_staked_cents: self.total_staked_cents,
            claimed: self.claimed,
        }
    }
}

/// Parse an untrusted vote row; `None` (logged) on schema mismatch.
pub fn parse_vote_row(value: &Value) -> Option<Vote> {
    match VoteRow::deserialize(value) {
        Ok(row) => Some(row.into_vote()),
        Err(err) => {
            warn!(kind = "vote", error = %err, "dropping invalid row");
            None
        }
    }
}

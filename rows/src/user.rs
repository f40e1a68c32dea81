//! User row schema.

use instinct_types::{UserAccount, WalletAddress};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// A user row as stored. Only `wallet` is required; every counter
/// defaults to zero so a freshly provisioned row parses cleanly.
#[derive(Clone, Debug, Deserialize)]
pub struct UserRow {
    pub wallet: String,
    #[serde(default)]
    pub signup_bonus_claimed: bool,
    #[serde(default)]
    pub last_weekly_reward_ts: u64,
    #[serde(default)]
    pub polls_created: u64,
    #[serde(default)]
    pub total_votes_cast: u64,
    #[serde(default)]
    pub total_polls_voted: u64,
    #[serde(default)]
    pub polls_won: u64,
    #[serde(default)]
    pub total_spent_cents: u64,
    #[serde(default)]
    pub total_winnings_cents: u64,
    #[serde(default)]
    pub creator_earnings_cents: u64,
    #[serde(default)]
    pub balance: u64,
}

impl UserRow {
    pub fn into_account(self) -> UserAccount {
        UserAccount {
            wallet: WalletAddress::new(self.wallet),
            balance_cents: self.balance,
            signup_bonus_claimed: self.signup_bonus_claimed,
            last_weekly_reward_ts: self.last_weekly_reward_ts,
            polls_created: self.polls_created,
            total_votes_cast: self.total_votes_cast,
            total_polls_voted: self.total_polls_voted,
            polls_won: self.polls_won,
            total_spent_cents: self.total_spent_cents,
            total_winnings_cents: self.total_winnings_cents,
            creator_earnings_cents: self.creator_earnings_cents,
        }
    }
}

/// Parse an untrusted user row; `None` (logged) on schema mismatch.
pub fn parse_user_row(value: &Value) -> Option<UserAccount> {
    match UserRow::deserialize(value) {
        Ok(row) => Some(row.into_account()),
        Err(err) => {
            warn!(kind = "user", error = %err, "dropping invalid row");
            None
        }
    }
}

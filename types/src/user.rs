//! User account aggregate — wallet-scoped balance and lifetime counters.

use crate::WalletAddress;
use serde::{Deserialize, Serialize};

/// Wallet-scoped account state.
///
/// Read-only from the vote engine's perspective except `balance_cents`,
/// which gates submission as an optimistic pre-flight check. The external
/// ledger remains authoritative for all of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub wallet: WalletAddress,
    pub balance_cents: u64,
    pub signup_bonus_claimed: bool,
    pub last_weekly_reward_ts: u64,
    pub polls_created: u64,
    pub total_votes_cast: u64,
    pub total_polls_voted: u64,
    pub polls_won: u64,
    pub total_spent_cents: u64,
    pub total_winnings_cents: u64,
    pub creator_earnings_cents: u64,
}

impl UserAccount {
    /// A blank account for a wallet that has no stored row yet.
    pub fn placeholder(wallet: WalletAddress) -> Self {
        Self {
            wallet,
            balance_cents: 0,
            signup_bonus_claimed: false,
            last_weekly_reward_ts: 0,
            polls_created: 0,
            total_votes_cast: 0,
            total_polls_voted: 0,
            polls_won: 0,
            total_spent_cents: 0,
            total_winnings_cents: 0,
            creator_earnings_cents: 0,
        }
    }

    /// Whether the account can cover a cost of `cents`.
    pub fn can_afford(&self, cents: u64) -> bool {
        self.balance_cents >= cents
    }
}

//! Vote type — one voter's accumulated stake on one poll.

use crate::WalletAddress;
use serde::{Deserialize, Serialize};

/// A voter's position in a poll.
///
/// There is at most one `Vote` per `(poll_id, voter)` pair; repeated
/// submissions accumulate into the same record (the external ledger owns
/// that uniqueness — this type just carries the identity key).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub poll_id: String,
    pub voter: WalletAddress,
    /// Coins held per option, index-aligned with the poll's options.
    pub votes_per_option: Vec<u64>,
    pub total_staked_cents: u64,
    /// Flips true exactly once, after settlement, via the claim action.
    pub claimed: bool,
}

impl Vote {
    /// Whether this record belongs to the given `(poll, voter)` pair.
    pub fn is_for(&self, poll_id: &str, voter: &WalletAddress) -> bool {
        self.poll_id == poll_id && &self.voter == voter
    }

    /// Total coins held across all options.
    pub fn total_coins(&self) -> u64 {
        self.votes_per_option.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_matches_both_fields() {
        let vote = Vote {
            poll_id: "p1".into(),
            voter: WalletAddress::new("alice"),
            votes_per_option: vec![2, 0],
            total_staked_cents: 200,
            claimed: false,
        };
        assert!(vote.is_for("p1", &WalletAddress::new("alice")));
        assert!(!vote.is_for("p1", &WalletAddress::new("bob")));
        assert!(!vote.is_for("p2", &WalletAddress::new("alice")));
        assert_eq!(vote.total_coins(), 2);
    }
}

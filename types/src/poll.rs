//! Poll type — one prediction market with discrete outcome options.

use crate::{Timestamp, WalletAddress};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PollStatus {
    /// Accepting votes (until `end_time`).
    Active,
    /// Winning option decided; payouts finalized.
    Settled,
}

impl From<PollStatus> for u8 {
    fn from(status: PollStatus) -> u8 {
        match status {
            PollStatus::Active => 0,
            PollStatus::Settled => 1,
        }
    }
}

impl TryFrom<u8> for PollStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Active),
            1 => Ok(Self::Settled),
            other => Err(format!("invalid poll status: {other}")),
        }
    }
}

/// A single prediction market.
///
/// All monetary fields are integer cents. Per-option sequences
/// (`options`, `option_images`, `vote_counts`) are index-aligned; the row
/// validator guarantees equal lengths before a `Poll` is constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    /// Unique record id.
    pub id: String,
    /// Monotonic sequence number per creator.
    pub poll_sequence: u64,
    /// Creator's wallet — the one address barred from voting.
    pub creator: WalletAddress,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    /// Outcome labels, in display order. Never empty.
    pub options: Vec<String>,
    /// Optional image per option; empty string means none.
    pub option_images: Vec<String>,
    /// Price of one vote-unit ("coin").
    pub unit_price_cents: u64,
    /// Votes close strictly before this instant.
    pub end_time: Timestamp,
    /// Seed stake contributed by the creator.
    pub creator_investment_cents: u64,
    pub status: PollStatus,
    /// Index into `options`, or [`Poll::WINNING_OPTION_UNSET`].
    pub winning_option: u8,
    /// Accumulated coins per option, index-aligned with `options`.
    pub vote_counts: Vec<u64>,
    pub total_pool_cents: u64,
    pub platform_fee_cents: u64,
    pub creator_reward_cents: u64,
    pub total_voters: u64,
    /// Store-assigned creation time, if present.
    pub created_at: Option<String>,
}

impl Poll {
    /// Sentinel value meaning "no winning option set".
    pub const WINNING_OPTION_UNSET: u8 = 255;

    /// Whether the poll has been settled.
    pub fn is_settled(&self) -> bool {
        self.status == PollStatus::Settled
    }

    /// Whether the voting window has closed (`now >= end_time`).
    pub fn has_ended(&self, now: Timestamp) -> bool {
        self.end_time.has_passed(now)
    }

    /// Total coins staked across all options.
    pub fn total_votes(&self) -> u64 {
        self.vote_counts.iter().sum()
    }

    /// The winning option index, if one has been set.
    pub fn winning_option(&self) -> Option<usize> {
        if self.winning_option == Self::WINNING_OPTION_UNSET {
            None
        } else {
            Some(self.winning_option as usize)
        }
    }

    /// Check the per-option length and winner invariants.
    ///
    /// Holds for every poll produced by the row validator; useful as a
    /// debug assertion at other construction sites.
    pub fn invariants_hold(&self) -> bool {
        let lengths_ok = !self.options.is_empty()
            && self.vote_counts.len() == self.options.len()
            && self.option_images.len() == self.options.len();
        let winner_ok = match self.winning_option() {
            Some(idx) => idx < self.options.len(),
            None => !self.is_settled(),
        };
        lengths_ok && winner_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll() -> Poll {
        Poll {
            id: "poll-1".into(),
            poll_sequence: 1,
            creator: WalletAddress::new("creator"),
            title: "Will it rain tomorrow?".into(),
            description: String::new(),
            category: "General".into(),
            image_url: String::new(),
            options: vec!["Yes".into(), "No".into()],
            option_images: vec![String::new(), String::new()],
            unit_price_cents: 100,
            end_time: Timestamp::new(2_000),
            creator_investment_cents: 500,
            status: PollStatus::Active,
            winning_option: Poll::WINNING_OPTION_UNSET,
            vote_counts: vec![3, 7],
            total_pool_cents: 1_000,
            platform_fee_cents: 0,
            creator_reward_cents: 0,
            total_voters: 4,
            created_at: None,
        }
    }

    #[test]
    fn status_roundtrips_as_integer() {
        let json = serde_json::to_string(&PollStatus::Settled).unwrap();
        assert_eq!(json, "1");
        let back: PollStatus = serde_json::from_str("0").unwrap();
        assert_eq!(back, PollStatus::Active);
        assert!(serde_json::from_str::<PollStatus>("7").is_err());
    }

    #[test]
    fn total_votes_sums_counts() {
        assert_eq!(poll().total_votes(), 10);
    }

    #[test]
    fn ended_is_inclusive_of_end_time() {
        let p = poll();
        assert!(!p.has_ended(Timestamp::new(1_999)));
        assert!(p.has_ended(Timestamp::new(2_000)));
    }

    #[test]
    fn unset_winner_is_none() {
        let mut p = poll();
        assert_eq!(p.winning_option(), None);
        p.winning_option = 1;
        assert_eq!(p.winning_option(), Some(1));
    }

    #[test]
    fn settled_without_winner_breaks_invariant() {
        let mut p = poll();
        p.status = PollStatus::Settled;
        assert!(!p.invariants_hold());
        p.winning_option = 0;
        assert!(p.invariants_hold());
    }
}

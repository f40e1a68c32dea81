//! Poll row schema and conversion to the canonical [`Poll`] shape.

use crate::de::null_default;
use crate::error::RowError;
use instinct_sanitize::{sanitize_description, sanitize_image_url, sanitize_options, sanitize_title};
use instinct_types::{Poll, PollStatus, Timestamp, WalletAddress};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

fn default_category() -> String {
    "General".to_string()
}

fn default_winning_option() -> u8 {
    Poll::WINNING_OPTION_UNSET
}

/// A poll row as stored, with the schema's default-fill rules applied.
///
/// Required: `id`, `poll_id`, `creator`, `title`, `options`,
/// `unit_price_cents`, `end_time`. Everything else defaults per the
/// documented fill table.
#[derive(Clone, Debug, Deserialize)]
pub struct PollRow {
    pub id: String,
    pub poll_id: u64,
    pub creator: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub option_images: Vec<Option<String>>,
    pub options: Vec<String>,
    pub unit_price_cents: u64,
    pub end_time: u64,
    #[serde(default)]
    pub creator_investment_cents: u64,
    #[serde(default)]
    pub status: u8,
    #[serde(default = "default_winning_option")]
    pub winning_option: u8,
    #[serde(default)]
    pub vote_counts: Vec<u64>,
    #[serde(default)]
    pub total_pool_cents: u64,
    #[serde(default)]
    pub platform_fee_cents: u64,
    #[serde(default)]
    pub creator_reward_cents: u64,
    #[serde(default)]
    pub total_voters: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PollRow {
    /// Convert into the canonical domain shape, sanitizing user-authored
    /// text and normalizing the per-option sequences.
    ///
    /// Length policy: `vote_counts` and `option_images` are resized to
    /// `options.len()` (zero / empty fill, excess dropped) so the length
    /// invariant always holds downstream. Rows with an impossible winner
    /// or a settled status without one are rejected outright.
    pub fn into_poll(self) -> Result<Poll, RowError> {
        if self.options.is_empty() {
            return Err(RowError::NoOptions);
        }
        let status =
            PollStatus::try_from(self.status).map_err(|_| RowError::UnknownStatus(self.status))?;
        if self.winning_option != Poll::WINNING_OPTION_UNSET
            && (self.winning_option as usize) >= self.options.len()
        {
            return Err(RowError::WinnerOutOfRange {
                winner: self.winning_option,
                options: self.options.len(),
            });
        }
        if status == PollStatus::Settled && self.winning_option == Poll::WINNING_OPTION_UNSET {
            return Err(RowError::SettledWithoutWinner);
        }

        let options = sanitize_options(&self.options);
        let n = options.len();

        let mut vote_counts = self.vote_counts;
        vote_counts.resize(n, 0);

        let mut option_images: Vec<String> = self
            .option_images
            .into_iter()
            .map(|img| sanitize_image_url(&img.unwrap_or_default()))
            .collect();
        option_images.resize(n, String::new());

        Ok(Poll {
            id: self.id,
            poll_sequence: self.poll_id,
            creator: WalletAddress::new(self.creator),
            title: sanitize_title(&self.title),
            description: sanitize_description(&self.description),
            category: self.category,
            image_url: sanitize_image_url(&self.image_url),
            options,
            option_images,
            unit_price_cents: self.unit_price_cents,
            end_time: Timestamp::new(self.end_time),
            creator_investment_cents: self.creator_investment_cents,
            status,
            winning_option: self.winning_option,
            vote_counts,
            total_pool_cents: self.total_pool_cents,
            platform_fee_cents: self.platform_fee_cents,
            creator_reward_cents: self.creator_reward_cents,
            total_voters: self.total_voters,
            created_at: self.created_at,
        })
    }
}

/// Parse and normalize an untrusted poll row.
///
/// Returns the canonical poll, or `None` after logging the cause. Callers
/// skip the row and keep processing.
pub fn parse_poll_row(value: &Value) -> Option<Poll> {
    let row = match PollRow::deserialize(value) {
        Ok(row) => row,
        Err(err) => {
            warn!(kind = "poll", error = %err, "dropping invalid row");
            return None;
        }
    };
    match row.into_poll() {
        Ok(poll) => {
            debug_assert!(poll.invariants_hold());
            Some(poll)
        }
        Err(err) => {
            warn!(kind = "poll", error = %err, "dropping invalid row");
            None
        }
    }
}

//! Pure eligibility predicates, derived fresh from poll + wallet + clock.

use crate::identity::WalletSession;
use instinct_types::{Poll, Timestamp, Vote, WalletAddress};

/// The derived flags that gate voting UI state.
///
/// Nothing here is stored; recompute on every render from current inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eligibility {
    pub is_ended: bool,
    pub is_settled: bool,
    pub is_creator: bool,
    pub is_connected: bool,
    /// Open for voting by this actor: not ended, not settled, not the
    /// creator, wallet connected.
    pub can_vote: bool,
}

impl Eligibility {
    pub fn compute(poll: &Poll, wallet: &dyn WalletSession, now: Timestamp) -> Self {
        let is_ended = poll.has_ended(now);
        let is_settled = poll.is_settled();
        let is_creator = wallet.address().as_ref() == Some(&poll.creator);
        let is_connected = wallet.is_connected();
        Self {
            is_ended,
            is_settled,
            is_creator,
            is_connected,
            can_vote: !is_ended && !is_settled && !is_creator && is_connected,
        }
    }
}

/// This voter's existing position in the poll, if any. At most one record
/// exists per `(poll, voter)` pair.
pub fn existing_vote<'a>(
    votes: &'a [Vote],
    poll_id: &str,
    voter: &WalletAddress,
) -> Option<&'a Vote> {
    votes.iter().find(|v| v.is_for(poll_id, voter))
}

//! Per-(poll, wallet) voting session state and the submit lifecycle.

use crate::eligibility::Eligibility;
use crate::error::VoteError;
use crate::identity::WalletSession;
use crate::ledger::VoteLedger;
use instinct_types::{Poll, Timestamp};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How long a successful submit stays in its "success" display state
/// before the selection resets.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(1500);

/// What a successful submission bought. Returned to the caller so a thin
/// adapter can surface it (toast, notification feed) without the engine
/// knowing about presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteReceipt {
    pub poll_id: String,
    pub option_index: usize,
    pub option_label: String,
    pub coins: u64,
    pub cost_cents: u64,
}

/// One voting session: a single poll, the acting wallet, and the
/// selection state that exists only for the current UI session.
///
/// Everything else (`is_ended`, `can_vote`, ...) is derived on demand via
/// [`Eligibility::compute`]. The session owns its state exclusively; the
/// only suspension points are the ledger call and the success-display
/// timer.
pub struct VoteSession {
    poll: Poll,
    ledger: Arc<dyn VoteLedger>,
    wallet: Arc<dyn WalletSession>,
    selected_option: Option<usize>,
    coins: u64,
    submitting: bool,
    just_succeeded: bool,
}

impl VoteSession {
    pub fn new(poll: Poll, ledger: Arc<dyn VoteLedger>, wallet: Arc<dyn WalletSession>) -> Self {
        Self {
            poll,
            ledger,
            wallet,
            selected_option: None,
            coins: 1,
            submitting: false,
            just_succeeded: false,
        }
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    /// Set the stake amount for the pending selection.
    pub fn set_coins(&mut self, coins: u64) {
        self.coins = coins;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn just_succeeded(&self) -> bool {
        self.just_succeeded
    }

    /// Cost of the current stake at this poll's unit price.
    pub fn cost_cents(&self) -> u64 {
        self.coins.saturating_mul(self.poll.unit_price_cents)
    }

    /// Current eligibility flags for this session's poll and wallet.
    pub fn eligibility(&self, now: Timestamp) -> Eligibility {
        Eligibility::compute(&self.poll, self.wallet.as_ref(), now)
    }

    /// Select an option, arming the confirm step with a stake of 1.
    ///
    /// Refused (`Err`, selection unchanged) when the poll is closed, the
    /// option does not exist, or the actor is the creator. A disconnected
    /// wallet triggers the external connect flow and is refused; the user
    /// retries after connecting.
    pub fn select_option(&mut self, index: usize, now: Timestamp) -> Result<(), VoteError> {
        if self.poll.has_ended(now) {
            return Err(VoteError::PollEnded);
        }
        if self.poll.is_settled() {
            return Err(VoteError::PollSettled);
        }
        if !self.wallet.is_connected() {
            self.wallet.request_connect();
            return Err(VoteError::WalletNotConnected);
        }
        if self.wallet.address().as_ref() == Some(&self.poll.creator) {
            return Err(VoteError::SelfVote);
        }
        if index >= self.poll.options.len() {
            return Err(VoteError::InvalidOption {
                index,
                options: self.poll.options.len(),
            });
        }
        self.selected_option = Some(index);
        self.coins = 1;
        Ok(())
    }

    /// Drop the pending selection. No other side effects.
    pub fn clear_selection(&mut self) {
        self.selected_option = None;
    }

    /// Submit the pending selection to the ledger.
    ///
    /// Pre-flight rejections (no selection, disconnected wallet, zero
    /// coins, insufficient balance) return before the ledger is touched.
    /// The balance check is optimistic only; the ledger re-validates. On
    /// ledger failure the selection is retained so the user can retry.
    /// `submitting` is reset on every exit path.
    pub async fn submit_vote(&mut self) -> Result<VoteReceipt, VoteError> {
        let option_index = self.selected_option.ok_or(VoteError::NoSelection)?;
        if !self.wallet.is_connected() {
            self.wallet.request_connect();
            return Err(VoteError::WalletNotConnected);
        }
        if self.coins == 0 {
            return Err(VoteError::ZeroCoins);
        }
        let cost_cents = self.cost_cents();
        if let Some(available_cents) = self.wallet.balance_cents() {
            if cost_cents > available_cents {
                return Err(VoteError::InsufficientBalance {
                    needed_cents: cost_cents,
                    available_cents,
                });
            }
        }

        self.submitting = true;
        debug!(
            poll_id = %self.poll.id,
            option_index,
            coins = self.coins,
            cost_cents,
            "submitting vote"
        );
        let result = self
            .ledger
            .cast_vote(&self.poll.id, option_index, self.coins)
            .await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.just_succeeded = true;
                debug!(poll_id = %self.poll.id, "vote accepted");
                Ok(VoteReceipt {
                    poll_id: self.poll.id.clone(),
                    option_index,
                    option_label: self.poll.options[option_index].clone(),
                    coins: self.coins,
                    cost_cents,
                })
            }
            Err(err) => {
                debug!(poll_id = %self.poll.id, error = %err, "vote rejected by ledger");
                Err(VoteError::Ledger(err))
            }
        }
    }

    /// Hold the success state for [`SUCCESS_DISPLAY`], then return the
    /// session to its pre-selection state. Call after a successful
    /// [`submit_vote`](Self::submit_vote); no-op otherwise.
    pub async fn finish_success_display(&mut self) {
        if !self.just_succeeded {
            return;
        }
        tokio::time::sleep(SUCCESS_DISPLAY).await;
        self.just_succeeded = false;
        self.selected_option = None;
    }
}

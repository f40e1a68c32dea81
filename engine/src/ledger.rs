//! The external ledger mutation port.

use crate::error::LedgerError;
use async_trait::async_trait;

/// The authoritative stake-accounting backend.
///
/// Everything this crate checks before calling it is optimistic
/// pre-flight; the ledger re-validates and is the sole source of truth
/// for uniqueness, balances, and poll state. No timeout is imposed here —
/// the call is trusted to resolve or reject.
#[async_trait]
pub trait VoteLedger: Send + Sync {
    /// Buy `coins` vote-units on `option_index` of poll `poll_id`.
    async fn cast_vote(
        &self,
        poll_id: &str,
        option_index: usize,
        coins: u64,
    ) -> Result<(), LedgerError>;
}

//! Nullable ledger — scriptable outcomes, recorded calls.

use async_trait::async_trait;
use instinct_engine::{LedgerError, VoteLedger};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One recorded `cast_vote` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCast {
    pub poll_id: String,
    pub option_index: usize,
    pub coins: u64,
}

/// An in-memory ledger for testing.
///
/// Succeeds by default; queue failures with [`fail_next`](Self::fail_next).
/// Every call is recorded for assertion.
#[derive(Default)]
pub struct NullLedger {
    scripted: Mutex<VecDeque<Result<(), LedgerError>>>,
    calls: Mutex<Vec<RecordedCast>>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next call to fail with `err`.
    pub fn fail_next(&self, err: LedgerError) {
        self.scripted.lock().unwrap().push_back(Err(err));
    }

    /// Script the next call to succeed (useful after queued failures).
    pub fn succeed_next(&self) {
        self.scripted.lock().unwrap().push_back(Ok(()));
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCast> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl VoteLedger for NullLedger {
    async fn cast_vote(
        &self,
        poll_id: &str,
        option_index: usize,
        coins: u64,
    ) -> Result<(), LedgerError> {
        self.calls.lock().unwrap().push(RecordedCast {
            poll_id: poll_id.to_string(),
            option_index,
            coins,
        });
        self.scripted.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

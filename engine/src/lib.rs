//! Vote eligibility and submission engine.
//!
//! The core workflow of the application: given a poll, the acting wallet,
//! and the current time, decide whether a vote may be cast, and drive the
//! select → confirm → persist → reset lifecycle. The ledger mutation and
//! the wallet connection flow stay behind traits; this crate only computes
//! eligibility, sequences the submission, and reports structured results.

pub mod eligibility;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod notifier;
pub mod session;

pub use eligibility::{existing_vote, Eligibility};
pub use error::{LedgerError, VoteError};
pub use identity::WalletSession;
pub use ledger::VoteLedger;
pub use session::{VoteReceipt, VoteSession, SUCCESS_DISPLAY};

//! Nullable infrastructure for deterministic testing.
//!
//! The engine's external dependencies (clock, ledger, wallet adapter) are
//! abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic, scriptable values
//! - Record how they were used
//! - Never touch the network or a real wallet
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod ledger;
pub mod wallet;

pub use clock::NullClock;
pub use ledger::{NullLedger, RecordedCast};
pub use wallet::NullWalletSession;

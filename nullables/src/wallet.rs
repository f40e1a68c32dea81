//! Nullable wallet session — scriptable identity and balance.

use instinct_engine::WalletSession;
use instinct_types::WalletAddress;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A wallet session for testing.
///
/// Starts disconnected; connect it programmatically. Records how many
/// times the engine asked for the connect flow.
#[derive(Default)]
pub struct NullWalletSession {
    address: Mutex<Option<WalletAddress>>,
    balance_cents: Mutex<Option<u64>>,
    connect_requests: AtomicUsize,
}

impl NullWalletSession {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: impl Into<WalletAddress>) -> Self {
        let session = Self::default();
        session.connect(address);
        session
    }

    /// Simulate the user completing the connect flow.
    pub fn connect(&self, address: impl Into<WalletAddress>) {
        *self.address.lock().unwrap() = Some(address.into());
    }

    pub fn disconnect(&self) {
        *self.address.lock().unwrap() = None;
    }

    /// Set the loaded account balance; `None` means no account row.
    pub fn set_balance_cents(&self, cents: Option<u64>) {
        *self.balance_cents.lock().unwrap() = cents;
    }

    /// How many times the connect flow was triggered.
    pub fn connect_requests(&self) -> usize {
        self.connect_requests.load(Ordering::SeqCst)
    }
}

impl WalletSession for NullWalletSession {
    fn address(&self) -> Option<WalletAddress> {
        self.address.lock().unwrap().clone()
    }

    fn request_connect(&self) {
        self.connect_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn balance_cents(&self) -> Option<u64> {
        *self.balance_cents.lock().unwrap()
    }
}

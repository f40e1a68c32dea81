//! The identity and balance provider port.

use instinct_types::WalletAddress;

/// The wallet-adapter surface the engine needs.
pub trait WalletSession: Send + Sync {
    /// The connected wallet's address, if any.
    fn address(&self) -> Option<WalletAddress>;

    fn is_connected(&self) -> bool {
        self.address().is_some()
    }

    /// Trigger the external connect flow. Non-blocking: the user completes
    /// (or abandons) the flow out of band and retries their action.
    fn request_connect(&self);

    /// The account balance in cents, if an account row is loaded.
    /// `None` skips the optimistic balance pre-flight.
    fn balance_cents(&self) -> Option<u64>;
}

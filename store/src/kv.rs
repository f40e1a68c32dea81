//! Abstract durable key-value port.
//!
//! The stores depend only on this trait; production wires in a real
//! backend ([`crate::FileKv`]) and tests an in-memory one
//! ([`crate::MemoryKv`]).

use crate::error::StoreError;

/// A minimal durable key-value store.
pub trait KeyValue: Send + Sync {
    /// Fetch the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

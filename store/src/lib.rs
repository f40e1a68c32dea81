//! Local client-side state: notifications and bookmarks.
//!
//! Both stores are authoritative in memory for the session and flush to a
//! durable key-value port on every mutation, best-effort — a failed write
//! is logged and swallowed, and a failed read at startup yields an empty
//! store. This mirrors how a browser treats local storage.

pub mod bookmarks;
pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
pub mod notifications;

pub use bookmarks::BookmarkStore;
pub use error::StoreError;
pub use file::FileKv;
pub use kv::KeyValue;
pub use memory::MemoryKv;
pub use notifications::{NewNotification, NotificationStore, MAX_NOTIFICATIONS};

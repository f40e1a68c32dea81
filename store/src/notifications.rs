//! Notification feed, capped at the 50 most recent entries.

use crate::kv::KeyValue;
use instinct_types::{Notification, NotificationKind, WalletAddress};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Maximum retained notifications; the oldest are evicted on overflow.
pub const MAX_NOTIFICATIONS: usize = 50;

const STORAGE_KEY: &str = "instinctfi_notifications";

/// Fields a caller supplies when raising a notification. Id, timestamp,
/// and the unread flag are assigned by the store.
#[derive(Clone, Debug)]
pub struct NewNotification {
    pub wallet: WalletAddress,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub poll_id: Option<String>,
}

/// The per-client notification feed, newest first.
///
/// Authoritative in memory; every mutation flushes JSON to the key-value
/// port best-effort.
pub struct NotificationStore {
    kv: Arc<dyn KeyValue>,
    items: Vec<Notification>,
}

impl NotificationStore {
    /// Load the feed from the port. A missing or unreadable value yields
    /// an empty feed rather than an error.
    pub fn load(kv: Arc<dyn KeyValue>) -> Self {
        let items = match kv.get(STORAGE_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                warn!(error = %err, "discarding unreadable notification feed");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read notification feed");
                Vec::new()
            }
        };
        Self { kv, items }
    }

    /// Add a notification: assigns a fresh id and timestamp, marks it
    /// unread, prepends it, and evicts past the cap.
    pub fn add(&mut self, new: NewNotification) -> &Notification {
        let created_at = now_millis();
        let notification = Notification {
            id: fresh_id(created_at),
            wallet: new.wallet,
            kind: new.kind,
            title: new.title,
            message: new.message,
            poll_id: new.poll_id,
            read: false,
            created_at,
        };
        self.items.insert(0, notification);
        self.items.truncate(MAX_NOTIFICATIONS);
        self.persist();
        &self.items[0]
    }

    /// Mark one notification read; no-op if the id is absent.
    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
            self.persist();
        }
    }

    /// Mark the whole feed read.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
        self.persist();
    }

    /// Empty the feed.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Entries, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.items) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "failed to encode notification feed");
                return;
            }
        };
        if let Err(err) = self.kv.put(STORAGE_KEY, &bytes) {
            warn!(error = %err, "failed to persist notification feed");
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// `{millis}-{4 alphanumeric chars}` — unique enough for a 50-entry feed.
fn fresh_id(millis: u64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(char::from)
        .collect();
    format!("{millis}-{suffix}")
}

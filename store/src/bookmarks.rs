//! Bookmarked poll ids, scoped per client.

use crate::kv::KeyValue;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

const STORAGE_KEY: &str = "instinctfi_bookmarks";

/// The client's set of bookmarked poll ids.
///
/// Plain set semantics; persisted as a JSON array of ids, best-effort.
pub struct BookmarkStore {
    kv: Arc<dyn KeyValue>,
    bookmarks: HashSet<String>,
}

impl BookmarkStore {
    /// Load bookmarks from the port; unreadable state yields an empty set.
    pub fn load(kv: Arc<dyn KeyValue>) -> Self {
        let bookmarks = match kv.get(STORAGE_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice::<Vec<String>>(&bytes)
                .map(HashSet::from_iter)
                .unwrap_or_else(|err| {
                    warn!(error = %err, "discarding unreadable bookmarks");
                    HashSet::new()
                }),
            Ok(None) => HashSet::new(),
            Err(err) => {
                warn!(error = %err, "failed to read bookmarks");
                HashSet::new()
            }
        };
        Self { kv, bookmarks }
    }

    /// Toggle membership for `poll_id`; returns the new membership state.
    pub fn toggle(&mut self, poll_id: &str) -> bool {
        let added = if self.bookmarks.contains(poll_id) {
            self.bookmarks.remove(poll_id);
            false
        } else {
            self.bookmarks.insert(poll_id.to_string());
            true
        };
        self.persist();
        added
    }

    pub fn is_bookmarked(&self, poll_id: &str) -> bool {
        self.bookmarks.contains(poll_id)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn persist(&self) {
        // Sorted for a stable on-disk representation.
        let mut ids: Vec<&String> = self.bookmarks.iter().collect();
        ids.sort();
        let bytes = match serde_json::to_vec(&ids) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "failed to encode bookmarks");
                return;
            }
        };
        if let Err(err) = self.kv.put(STORAGE_KEY, &bytes) {
            warn!(error = %err, "failed to persist bookmarks");
        }
    }
}

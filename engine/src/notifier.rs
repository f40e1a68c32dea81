//! Adapter from submit outcomes to the notification feed.
//!
//! The session returns structured results; this is the thin layer that
//! turns them into user-visible artifacts. Failures are surfaced as
//! transient messages only (their `Display` text) and are not recorded in
//! the feed.

use crate::session::VoteReceipt;
use instinct_store::{NewNotification, NotificationStore};
use instinct_types::{NotificationKind, WalletAddress};

/// The transient success message for a placed vote.
pub fn success_message(receipt: &VoteReceipt) -> String {
    format!(
        "Bought {} coin(s) on \"{}\"",
        receipt.coins, receipt.option_label
    )
}

/// Record a placed vote in the wallet's notification feed.
pub fn record_vote_success(
    store: &mut NotificationStore,
    wallet: WalletAddress,
    receipt: &VoteReceipt,
) {
    store.add(NewNotification {
        wallet,
        kind: NotificationKind::PollVoted,
        title: "Vote placed".to_string(),
        message: success_message(receipt),
        poll_id: Some(receipt.poll_id.clone()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use instinct_store::MemoryKv;
    use std::sync::Arc;

    fn receipt() -> VoteReceipt {
        VoteReceipt {
            poll_id: "p1".into(),
            option_index: 0,
            option_label: "Yes".into(),
            coins: 3,
            cost_cents: 300,
        }
    }

    #[test]
    fn message_names_option_and_stake() {
        assert_eq!(success_message(&receipt()), "Bought 3 coin(s) on \"Yes\"");
    }

    #[test]
    fn success_lands_in_feed_unread() {
        let mut store = NotificationStore::load(Arc::new(MemoryKv::new()));
        record_vote_success(&mut store, WalletAddress::new("alice"), &receipt());
        let items = store.notifications();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, NotificationKind::PollVoted);
        assert_eq!(items[0].poll_id.as_deref(), Some("p1"));
        assert!(!items[0].read);
    }
}

//! End-to-end tests for the voting session lifecycle, driven entirely by
//! nullable collaborators.

use std::sync::Arc;

use instinct_engine::{LedgerError, VoteError, VoteSession};
use instinct_nullables::{NullClock, NullLedger, NullWalletSession, RecordedCast};
use instinct_types::{Poll, PollStatus, Timestamp, WalletAddress};

fn poll(end: u64) -> Poll {
    Poll {
        id: "p1".into(),
        poll_sequence: 1,
        creator: WalletAddress::new("creator"),
        title: "Will it rain tomorrow?".into(),
        description: String::new(),
        category: "General".into(),
        image_url: String::new(),
        options: vec!["Yes".into(), "No".into()],
        option_images: vec![String::new(), String::new()],
        unit_price_cents: 100,
        end_time: Timestamp::new(end),
        creator_investment_cents: 0,
        status: PollStatus::Active,
        winning_option: Poll::WINNING_OPTION_UNSET,
        vote_counts: vec![0, 0],
        total_pool_cents: 0,
        platform_fee_cents: 0,
        creator_reward_cents: 0,
        total_voters: 0,
        created_at: None,
    }
}

fn connected_voter(balance: u64) -> Arc<NullWalletSession> {
    let wallet = Arc::new(NullWalletSession::connected("alice"));
    wallet.set_balance_cents(Some(balance));
    wallet
}

#[tokio::test(start_paused = true)]
async fn happy_path_select_submit_reset() {
    let clock = NullClock::new(1_000);
    let ledger = Arc::new(NullLedger::new());
    let wallet = connected_voter(1_000);
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), wallet);

    assert!(session.eligibility(clock.now()).can_vote);
    session.select_option(0, clock.now()).unwrap();
    assert_eq!(session.selected_option(), Some(0));
    assert_eq!(session.coins(), 1);

    let receipt = session.submit_vote().await.unwrap();
    assert_eq!(
        ledger.calls(),
        vec![RecordedCast {
            poll_id: "p1".into(),
            option_index: 0,
            coins: 1,
        }]
    );
    assert_eq!(receipt.option_label, "Yes");
    assert_eq!(receipt.cost_cents, 100);
    assert!(session.just_succeeded());
    assert!(!session.is_submitting());

    session.finish_success_display().await;
    assert!(!session.just_succeeded());
    assert_eq!(session.selected_option(), None);
}

#[tokio::test]
async fn insufficient_balance_rejects_before_ledger() {
    let ledger = Arc::new(NullLedger::new());
    let wallet = connected_voter(50);
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), wallet);

    session.select_option(0, Timestamp::new(1_000)).unwrap();
    let err = session.submit_vote().await.unwrap_err();
    assert_eq!(
        err,
        VoteError::InsufficientBalance {
            needed_cents: 100,
            available_cents: 50,
        }
    );
    assert_eq!(ledger.call_count(), 0);
    // Selection survives so the user can retry after topping up.
    assert_eq!(session.selected_option(), Some(0));
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn no_selection_rejects_without_ledger_call() {
    let ledger = Arc::new(NullLedger::new());
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), connected_voter(1_000));

    assert_eq!(session.submit_vote().await.unwrap_err(), VoteError::NoSelection);
    assert_eq!(ledger.call_count(), 0);
}

#[tokio::test]
async fn zero_coins_rejects() {
    let ledger = Arc::new(NullLedger::new());
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), connected_voter(1_000));

    session.select_option(1, Timestamp::new(1_000)).unwrap();
    session.set_coins(0);
    assert_eq!(session.submit_vote().await.unwrap_err(), VoteError::ZeroCoins);
    assert_eq!(ledger.call_count(), 0);
}

#[tokio::test]
async fn missing_account_row_skips_balance_preflight() {
    let ledger = Arc::new(NullLedger::new());
    let wallet = Arc::new(NullWalletSession::connected("alice"));
    // No balance loaded; the ledger is the only check.
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), wallet);

    session.select_option(0, Timestamp::new(1_000)).unwrap();
    session.set_coins(5);
    session.submit_vote().await.unwrap();
    assert_eq!(ledger.call_count(), 1);
}

#[test]
fn creator_cannot_select_own_poll() {
    let ledger = Arc::new(NullLedger::new());
    let wallet = Arc::new(NullWalletSession::connected("creator"));
    let mut session = VoteSession::new(poll(4_600), ledger, wallet);

    let err = session.select_option(0, Timestamp::new(1_000)).unwrap_err();
    assert_eq!(err, VoteError::SelfVote);
    assert_eq!(session.selected_option(), None);
}

#[test]
fn ended_poll_refuses_selection_regardless_of_wallet() {
    let clock = NullClock::new(4_999);
    let ledger = Arc::new(NullLedger::new());
    let mut session = VoteSession::new(poll(5_000), ledger, connected_voter(1_000_000));

    assert!(session.eligibility(clock.now()).can_vote);
    clock.advance(1);
    assert!(!session.eligibility(clock.now()).can_vote);
    let err = session.select_option(0, clock.now()).unwrap_err();
    assert_eq!(err, VoteError::PollEnded);
}

#[test]
fn settled_poll_refuses_selection() {
    let ledger = Arc::new(NullLedger::new());
    let mut settled = poll(9_000);
    settled.status = PollStatus::Settled;
    settled.winning_option = 1;
    let mut session = VoteSession::new(settled, ledger, connected_voter(1_000));

    let err = session.select_option(0, Timestamp::new(1_000)).unwrap_err();
    assert_eq!(err, VoteError::PollSettled);
}

#[test]
fn out_of_range_option_is_refused() {
    let ledger = Arc::new(NullLedger::new());
    let mut session = VoteSession::new(poll(4_600), ledger, connected_voter(1_000));

    let err = session.select_option(2, Timestamp::new(1_000)).unwrap_err();
    assert_eq!(
        err,
        VoteError::InvalidOption {
            index: 2,
            options: 2,
        }
    );
}

#[test]
fn disconnected_selection_triggers_connect_flow() {
    let ledger = Arc::new(NullLedger::new());
    let wallet = Arc::new(NullWalletSession::disconnected());
    let mut session = VoteSession::new(poll(4_600), ledger, wallet.clone());

    let err = session.select_option(0, Timestamp::new(1_000)).unwrap_err();
    assert_eq!(err, VoteError::WalletNotConnected);
    assert_eq!(wallet.connect_requests(), 1);
    assert_eq!(session.selected_option(), None);

    // After the user completes the flow, the same selection succeeds.
    wallet.connect("alice");
    session.select_option(0, Timestamp::new(1_000)).unwrap();
    assert_eq!(session.selected_option(), Some(0));
}

#[tokio::test]
async fn disconnect_between_select_and_submit_aborts() {
    let ledger = Arc::new(NullLedger::new());
    let wallet = connected_voter(1_000);
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), wallet.clone());

    session.select_option(0, Timestamp::new(1_000)).unwrap();
    wallet.disconnect();
    let err = session.submit_vote().await.unwrap_err();
    assert_eq!(err, VoteError::WalletNotConnected);
    assert_eq!(wallet.connect_requests(), 1);
    assert_eq!(ledger.call_count(), 0);
}

#[tokio::test]
async fn ledger_failure_keeps_selection_for_retry() {
    let ledger = Arc::new(NullLedger::new());
    let wallet = connected_voter(1_000);
    let mut session = VoteSession::new(poll(4_600), ledger.clone(), wallet);

    session.select_option(1, Timestamp::new(1_000)).unwrap();
    session.set_coins(3);
    ledger.fail_next(LedgerError::InsufficientFunds);

    let err = session.submit_vote().await.unwrap_err();
    assert_eq!(err, VoteError::Ledger(LedgerError::InsufficientFunds));
    assert!(!session.is_submitting());
    assert!(!session.just_succeeded());
    assert_eq!(session.selected_option(), Some(1));
    assert_eq!(session.coins(), 3);

    // Retry without reselecting.
    let receipt = session.submit_vote().await.unwrap();
    assert_eq!(receipt.coins, 3);
    assert_eq!(receipt.cost_cents, 300);
    assert_eq!(ledger.call_count(), 2);
}

#[test]
fn reselecting_resets_stake_to_one() {
    let ledger = Arc::new(NullLedger::new());
    let mut session = VoteSession::new(poll(4_600), ledger, connected_voter(1_000));

    session.select_option(0, Timestamp::new(1_000)).unwrap();
    session.set_coins(7);
    session.select_option(1, Timestamp::new(1_000)).unwrap();
    assert_eq!(session.coins(), 1);
    assert_eq!(session.selected_option(), Some(1));

    session.clear_selection();
    assert_eq!(session.selected_option(), None);
}

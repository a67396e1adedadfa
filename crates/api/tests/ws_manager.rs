//! Unit tests for `WsManager`.
//!
//! These tests exercise the live-feed connection manager directly, without
//! performing any HTTP upgrades. They verify add/remove semantics, targeted
//! sends, and graceful shutdown behaviour.

use assert_matches::assert_matches;
use axum::extract::ws::Message;
use printforge_api::ws::WsManager;

// ---------------------------------------------------------------------------
// Test: new manager starts with zero connections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_manager_has_zero_connections() {
    let manager = WsManager::new();

    assert_eq!(manager.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: add/remove drive the connection count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_and_remove_drive_connection_count() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    manager.remove("conn-1").await;
    assert_eq!(manager.connection_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: remove() with unknown ID is a no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_unknown_id_is_noop() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string()).await;
    manager.remove("nonexistent").await;

    assert_eq!(manager.connection_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: send_to() reaches only the targeted connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_to_reaches_only_the_target() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    let sent = manager
        .send_to("conn-1", Message::Text("snapshot".into()))
        .await;
    assert!(sent);

    let msg = rx1.recv().await.expect("conn-1 should receive the message");
    assert!(matches!(&msg, Message::Text(t) if *t == "snapshot"));

    // conn-2 must not have received anything.
    assert!(
        rx2.try_recv().is_err(),
        "untargeted connection must receive nothing"
    );
}

// ---------------------------------------------------------------------------
// Test: send_to() an unknown or closed connection reports failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_to_unknown_connection_returns_false() {
    let manager = WsManager::new();

    let sent = manager
        .send_to("nope", Message::Text("snapshot".into()))
        .await;

    assert!(!sent);
}

#[tokio::test]
async fn send_to_closed_channel_returns_false() {
    let manager = WsManager::new();

    let rx = manager.add("conn-1".to_string()).await;
    drop(rx);

    let sent = manager
        .send_to("conn-1", Message::Text("snapshot".into()))
        .await;

    assert!(!sent, "a dropped receiver means the send must fail");
}

// ---------------------------------------------------------------------------
// Test: ping_all() sends a Ping frame to every connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_all_reaches_every_connection() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    manager.ping_all().await;

    assert_matches!(rx1.recv().await, Some(Message::Ping(_)));
    assert_matches!(rx2.recv().await, Some(Message::Ping(_)));
}

// ---------------------------------------------------------------------------
// Test: shutdown_all() sends Close and clears all connections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let manager = WsManager::new();

    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;
    assert_eq!(manager.connection_count().await, 2);

    manager.shutdown_all().await;

    // Connection count should be zero after shutdown.
    assert_eq!(manager.connection_count().await, 0);

    // Both receivers should have received a Close message.
    let msg1 = rx1.recv().await.expect("rx1 should receive Close");
    assert!(
        matches!(msg1, Message::Close(None)),
        "Expected Close(None), got: {msg1:?}"
    );

    let msg2 = rx2.recv().await.expect("rx2 should receive Close");
    assert!(
        matches!(msg2, Message::Close(None)),
        "Expected Close(None), got: {msg2:?}"
    );

    // After Close, the channel should be closed (no more messages).
    assert!(
        rx1.recv().await.is_none(),
        "Channel should be closed after shutdown"
    );
}

// ---------------------------------------------------------------------------
// Test: adding with duplicate ID replaces the previous connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_id_replaces_previous_connection() {
    let manager = WsManager::new();

    let _rx_old = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    // Re-add with the same ID -- should replace, not duplicate.
    let mut rx_new = manager.add("conn-1".to_string()).await;
    assert_eq!(manager.connection_count().await, 1);

    manager
        .send_to("conn-1", Message::Text("replaced".into()))
        .await;
    let msg = rx_new.recv().await.expect("New rx should receive message");
    assert!(matches!(&msg, Message::Text(t) if *t == "replaced"));
}

#![cfg(not(feature = "web"))]

use super::*;

fn message(event: &str) -> SocketMessage {
    SocketMessage {
        topic: "realtime:bookmarks:u-1".to_owned(),
        event: event.to_owned(),
        payload: serde_json::json!({}),
        reference: None,
    }
}

// =============================================================
// Message builders
// =============================================================

#[test]
fn channel_topic_scopes_to_the_owner() {
    assert_eq!(channel_topic("u-1"), "realtime:bookmarks:u-1");
}

#[test]
fn join_message_subscribes_to_all_events_on_the_owner_rows() {
    let join = join_message("realtime:bookmarks:u-1", "u-1", "token", "ref-1");
    assert_eq!(join.topic, "realtime:bookmarks:u-1");
    assert_eq!(join.event, "phx_join");
    assert_eq!(join.reference.as_deref(), Some("ref-1"));
    assert_eq!(join.payload["access_token"], "token");

    let change = &join.payload["config"]["postgres_changes"][0];
    assert_eq!(change["event"], "*");
    assert_eq!(change["schema"], "public");
    assert_eq!(change["table"], "bookmarks");
    assert_eq!(change["filter"], "user_id=eq.u-1");
}

#[test]
fn heartbeat_message_targets_the_phoenix_topic() {
    let beat = heartbeat_message("ref-2");
    assert_eq!(beat.topic, "phoenix");
    assert_eq!(beat.event, "heartbeat");
    assert_eq!(beat.reference.as_deref(), Some("ref-2"));
}

#[test]
fn leave_message_leaves_the_joined_topic() {
    let leave = leave_message("realtime:bookmarks:u-1", "ref-3");
    assert_eq!(leave.topic, "realtime:bookmarks:u-1");
    assert_eq!(leave.event, "phx_leave");
}

// =============================================================
// Event classification
// =============================================================

#[test]
fn postgres_changes_is_a_change_notification() {
    assert!(is_change_notification(&message("postgres_changes")));
}

#[test]
fn control_events_are_not_change_notifications() {
    assert!(!is_change_notification(&message("phx_reply")));
    assert!(!is_change_notification(&message("phx_close")));
    assert!(!is_change_notification(&message("presence_state")));
    assert!(!is_change_notification(&message("heartbeat")));
}

// =============================================================
// Subscription handle
// =============================================================

#[test]
fn unsubscribe_deactivates_the_handle() {
    let handle = ChangeSubscription::test_handle();
    assert!(handle.is_active());
    handle.unsubscribe();
    assert!(!handle.is_active());
}

#[test]
fn unsubscribe_is_idempotent() {
    let handle = ChangeSubscription::test_handle();
    handle.unsubscribe();
    handle.unsubscribe();
    assert!(!handle.is_active());
}

#[test]
fn clones_share_liveness() {
    let handle = ChangeSubscription::test_handle();
    let clone = handle.clone();
    handle.unsubscribe();
    assert!(!clone.is_active());
}

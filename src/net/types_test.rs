use super::*;

// =============================================================
// Bookmark
// =============================================================

#[test]
fn bookmark_deserializes_from_table_row() {
    let row = r#"{
        "id": "8f14e45f-ea4c-41a4-9a4c-0f6c2f1d9a01",
        "url": "https://example.com",
        "title": "Example",
        "created_at": "2026-01-02T03:04:05.678Z",
        "user_id": "u-1"
    }"#;
    let bookmark: Bookmark = serde_json::from_str(row).unwrap();
    assert_eq!(bookmark.url, "https://example.com");
    assert_eq!(bookmark.title, "Example");
    assert_eq!(bookmark.user_id, "u-1");
}

// =============================================================
// AuthUser
// =============================================================

#[test]
fn auth_user_tolerates_missing_email() {
    let user: AuthUser = serde_json::from_str(r#"{"id": "u-1"}"#).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, None);
}

// =============================================================
// RemoteError
// =============================================================

#[test]
fn remote_error_displays_message_verbatim() {
    let err = RemoteError::new("duplicate key value violates unique constraint");
    assert_eq!(err.to_string(), "duplicate key value violates unique constraint");
    assert_eq!(err.message(), "duplicate key value violates unique constraint");
}

// =============================================================
// SocketMessage
// =============================================================

#[test]
fn socket_message_serializes_ref_under_wire_name() {
    let message = SocketMessage {
        topic: "phoenix".to_owned(),
        event: "heartbeat".to_owned(),
        payload: serde_json::json!({}),
        reference: Some("1".to_owned()),
    };
    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value["ref"], "1");
    assert!(value.get("reference").is_none());
}

#[test]
fn socket_message_payload_and_ref_default_when_absent() {
    let message: SocketMessage =
        serde_json::from_str(r#"{"topic": "t", "event": "phx_close"}"#).unwrap();
    assert_eq!(message.payload, serde_json::Value::Null);
    assert_eq!(message.reference, None);
}

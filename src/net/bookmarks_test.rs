#![cfg(not(feature = "web"))]

use super::*;

fn sample_config() -> Config {
    Config::new("https://demo.supabase.co", "anon-key")
}

fn sample_session() -> Session {
    Session {
        user_id: "u-1".to_owned(),
        access_token: "token".to_owned(),
    }
}

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_trims_and_accepts_non_empty_fields() {
    let (url, title) = validate_bookmark_input("  https://example.com  ", " Example ").unwrap();
    assert_eq!(url, "https://example.com");
    assert_eq!(title, "Example");
}

#[test]
fn validate_rejects_an_empty_url_after_trimming() {
    let err = validate_bookmark_input("   ", "Example").unwrap_err();
    assert_eq!(err.message(), VALIDATION_MESSAGE);
}

#[test]
fn validate_rejects_an_empty_title_after_trimming() {
    let err = validate_bookmark_input("https://example.com", "\t\n").unwrap_err();
    assert_eq!(err.message(), VALIDATION_MESSAGE);
}

#[test]
fn validate_does_not_check_url_shape() {
    assert!(validate_bookmark_input("not a url", "still fine").is_ok());
}

// =============================================================
// Query strings
// =============================================================

#[test]
fn list_query_scopes_by_owner_and_orders_newest_first() {
    assert_eq!(
        list_query("u-1"),
        "select=id,url,title,created_at,user_id&user_id=eq.u-1&order=created_at.desc"
    );
}

#[test]
fn delete_query_filters_by_row_id() {
    assert_eq!(delete_query("b-9"), "id=eq.b-9");
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_message_surfaces_the_service_message_verbatim() {
    let body = r#"{"code": "23505", "message": "duplicate key value"}"#;
    assert_eq!(error_message(409, body), "duplicate key value");
}

#[test]
fn error_message_falls_back_to_a_status_line() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(error_message(500, r#"{"hint": null}"#), "request failed: 500");
}

// =============================================================
// Insert short-circuit ordering
// =============================================================

#[test]
fn insert_with_blank_fields_fails_validation_before_any_remote_work() {
    let err = futures::executor::block_on(insert(
        &sample_config(),
        &sample_session(),
        "  ",
        "Example",
    ))
    .unwrap_err();
    assert_eq!(err.message(), VALIDATION_MESSAGE);
}

#[test]
fn insert_with_valid_fields_reaches_the_transport_layer() {
    // Outside the browser the transport is inert, which distinguishes the
    // validation short-circuit from an attempted remote call.
    let err = futures::executor::block_on(insert(
        &sample_config(),
        &sample_session(),
        "https://example.com",
        "Example",
    ))
    .unwrap_err();
    assert_eq!(err.message(), "not available outside the browser");
}

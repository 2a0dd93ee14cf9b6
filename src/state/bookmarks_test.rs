use super::*;

fn bookmark(id: &str) -> Bookmark {
    Bookmark {
        id: id.to_owned(),
        url: format!("https://example.com/{id}"),
        title: format!("Example {id}"),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        user_id: "u-1".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = BookmarksState::default();
    assert!(state.items.is_empty());
    assert!(!state.inserting);
    assert_eq!(state.error, None);
}

// =============================================================
// Refetch application
// =============================================================

#[test]
fn apply_list_replaces_rows_and_clears_the_banner() {
    let mut state = BookmarksState::default();
    state.fail("boom");
    state.apply_list(vec![bookmark("a"), bookmark("b")]);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.error, None);
}

#[test]
fn repeated_apply_list_converges_on_the_latest_fetch() {
    let mut state = BookmarksState::default();
    state.apply_list(vec![bookmark("a"), bookmark("b")]);
    state.apply_list(vec![bookmark("b")]);
    state.apply_list(vec![bookmark("b")]);
    assert_eq!(state.items, vec![bookmark("b")]);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn fail_keeps_the_previously_displayed_rows() {
    let mut state = BookmarksState::default();
    state.apply_list(vec![bookmark("a")]);
    state.fail("connection reset");
    assert_eq!(state.items, vec![bookmark("a")]);
    assert_eq!(state.error.as_deref(), Some("connection reset"));
}

#[test]
fn the_next_successful_fetch_replaces_the_banner() {
    let mut state = BookmarksState::default();
    state.fail("first");
    state.fail("second");
    assert_eq!(state.error.as_deref(), Some("second"));
    state.apply_list(Vec::new());
    assert_eq!(state.error, None);
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn clear_drops_rows_flags_and_banner() {
    let mut state = BookmarksState {
        items: vec![bookmark("a")],
        inserting: true,
        error: Some("boom".to_owned()),
    };
    state.clear();
    assert_eq!(state, BookmarksState::default());
}

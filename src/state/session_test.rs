use super::*;

fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_owned(),
        access_token: "token".to_owned(),
    }
}

// =============================================================
// Defaults and mount
// =============================================================

#[test]
fn default_state_is_uninitialized_with_no_session() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Uninitialized);
    assert_eq!(state.session, None);
    assert!(!state.is_signed_in());
}

#[test]
fn begin_check_enters_the_checking_phase() {
    let mut state = SessionState::default();
    state.begin_check();
    assert_eq!(state.phase, SessionPhase::CheckingSession);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolving_a_present_session_signs_in() {
    let mut state = SessionState::default();
    state.begin_check();
    state.resolve(Some(session("u-1")));
    assert_eq!(state.phase, SessionPhase::SignedIn);
    assert!(state.is_signed_in());
    assert_eq!(state.user_id(), Some("u-1"));
}

#[test]
fn resolving_an_absent_session_signs_out_without_error() {
    let mut state = SessionState::default();
    state.begin_check();
    state.resolve(None);
    assert_eq!(state.phase, SessionPhase::SignedOut);
    assert_eq!(state.user_id(), None);
}

// =============================================================
// Session-change events
// =============================================================

#[test]
fn an_absent_session_event_forces_signed_out_from_signed_in() {
    let mut state = SessionState::default();
    state.resolve(Some(session("u-1")));
    state.resolve(None);
    assert_eq!(state.phase, SessionPhase::SignedOut);
    assert_eq!(state.session, None);
}

#[test]
fn a_present_session_event_signs_in_from_any_phase() {
    let mut state = SessionState::default();
    state.resolve(Some(session("u-2")));
    assert_eq!(state.phase, SessionPhase::SignedIn);
    assert_eq!(state.user_id(), Some("u-2"));
}

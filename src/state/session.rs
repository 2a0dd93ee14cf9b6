//! Session state machine for the home view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page drives every transition: mount starts the session check,
//! resolution lands on signed-in or signed-out, and session-change events
//! force the signed-out edge from any phase.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Lifecycle phase of the session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Component not yet mounted.
    #[default]
    Uninitialized,
    /// The current-session query is in flight.
    CheckingSession,
    /// No authenticated session.
    SignedOut,
    /// A session is active and its user id is known.
    SignedIn,
}

/// Auth state provided via context to every route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub session: Option<Session>,
}

impl SessionState {
    /// Enter the in-flight check phase (mount transition).
    pub fn begin_check(&mut self) {
        self.phase = SessionPhase::CheckingSession;
    }

    /// Apply a resolved session: present lands on `SignedIn`, absent on
    /// `SignedOut`. Session-change events reuse this, so an absent session
    /// forces `SignedOut` from any phase.
    pub fn resolve(&mut self, session: Option<Session>) {
        self.phase = if session.is_some() {
            SessionPhase::SignedIn
        } else {
            SessionPhase::SignedOut
        };
        self.session = session;
    }

    pub fn is_signed_in(&self) -> bool {
        self.phase == SessionPhase::SignedIn
    }

    /// Owner id for repository calls, when signed in.
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }
}

//! Networking modules for the hosted-service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` wraps the auth service, `bookmarks` the remote table, and
//! `realtime` the change-notification socket; `types` defines the shared
//! wire schema.

pub mod bookmarks;
pub mod realtime;
pub mod session;
pub mod types;

/// Authorization header value for a session token.
#[cfg(any(test, feature = "web"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

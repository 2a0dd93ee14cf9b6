//! Shared wire DTOs for the hosted-service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the hosted service's payloads (auth-service user,
//! table rows, realtime socket envelopes) so serde round-trips stay lossless
//! and the net modules can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated identity context for the current browser tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user identifier assigned by the auth service (UUID string).
    pub user_id: String,
    /// Bearer token sent with table and realtime requests.
    pub access_token: String,
}

/// A bookmark row as stored in the remote table.
///
/// Rows are created through [`crate::net::bookmarks::insert`] and are
/// read-only afterwards except for full deletion; no edit operation exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Server-assigned unique identifier (UUID string).
    pub id: String,
    /// Bookmarked address. Non-empty after trim, but never validated as a URL.
    pub url: String,
    /// Display title, non-empty after trim.
    pub title: String,
    /// Server-assigned creation timestamp (ISO 8601 string).
    pub created_at: String,
    /// Owning user (UUID string); the service only returns rows to their owner.
    pub user_id: String,
}

/// The auth service's user record, as returned by `GET /auth/v1/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Primary email, when the identity provider shares one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Error from a remote call, carrying the service-provided message.
///
/// The UI surfaces the message verbatim in the banner area, so nothing here
/// is nested or structured beyond the text itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message, exactly as the service provided it.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// JSON envelope for the realtime socket (Phoenix message format).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocketMessage {
    /// Channel topic, e.g. `realtime:bookmarks:{user_id}` or `phoenix`.
    pub topic: String,
    /// Event name, e.g. `phx_join`, `heartbeat`, `postgres_changes`.
    pub event: String,
    /// Event payload. Change notifications are classified by event alone;
    /// this value is never inspected for them.
    #[serde(default)]
    pub payload: serde_json::Value,
    /// Client-assigned message reference, echoed back in replies.
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

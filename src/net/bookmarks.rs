//! Repository client for the remote bookmarks table.
//!
//! All operations are scoped to the authenticated owner and go through the
//! table's REST interface with the public API key plus the session's bearer
//! token. Failures carry the service-provided message so the UI can surface
//! it verbatim. Mutations never update the list themselves; the next
//! change-notification refetch does.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "bookmarks_test.rs"]
mod bookmarks_test;

use crate::config::Config;
use crate::net::types::{Bookmark, RemoteError, Session};

/// Banner message for empty form fields, checked before any remote call.
pub const VALIDATION_MESSAGE: &str = "Please provide both a URL and a title.";

#[cfg(not(feature = "web"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

/// Trim both fields and require them non-empty. No URL-format validation is
/// performed.
///
/// # Errors
///
/// Returns the validation message when either field is empty after trimming.
pub fn validate_bookmark_input(url: &str, title: &str) -> Result<(String, String), RemoteError> {
    let url = url.trim();
    let title = title.trim();
    if url.is_empty() || title.is_empty() {
        return Err(RemoteError::new(VALIDATION_MESSAGE));
    }
    Ok((url.to_owned(), title.to_owned()))
}

#[cfg(any(test, feature = "web"))]
fn list_query(owner_id: &str) -> String {
    format!("select=id,url,title,created_at,user_id&user_id=eq.{owner_id}&order=created_at.desc")
}

#[cfg(any(test, feature = "web"))]
fn delete_query(id: &str) -> String {
    format!("id=eq.{id}")
}

#[cfg(any(test, feature = "web"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pull the service's human-readable `message` out of an error body, falling
/// back to a status line when the body is not the expected JSON shape.
#[cfg(any(test, feature = "web"))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| request_failed_message(status))
}

/// Fetch the owner's bookmarks, newest first.
///
/// # Errors
///
/// Returns the service-provided message on any transport or service failure.
pub async fn list(config: &Config, session: &Session) -> Result<Vec<Bookmark>, RemoteError> {
    #[cfg(feature = "web")]
    {
        let url = format!(
            "{}?{}",
            config.bookmarks_endpoint(),
            list_query(&session.user_id)
        );
        let resp = gloo_net::http::Request::get(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &super::bearer(&session.access_token))
            .send()
            .await
            .map_err(|e| RemoteError::new(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::new(error_message(status, &body)));
        }
        resp.json::<Vec<Bookmark>>()
            .await
            .map_err(|e| RemoteError::new(e.to_string()))
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (config, session);
        Err(RemoteError::new(NOT_IN_BROWSER))
    }
}

/// Validate and insert a bookmark for the owner.
///
/// Empty-after-trim fields short-circuit with a validation error before any
/// remote call. On success the new row arrives through the next
/// notification-triggered refetch, not through this call's response.
///
/// # Errors
///
/// Returns the validation message, or the service-provided message on a
/// transport or service failure.
pub async fn insert(
    config: &Config,
    session: &Session,
    url: &str,
    title: &str,
) -> Result<(), RemoteError> {
    let (url, title) = validate_bookmark_input(url, title)?;
    #[cfg(feature = "web")]
    {
        let payload = serde_json::json!({
            "user_id": session.user_id,
            "url": url,
            "title": title,
        });
        let resp = gloo_net::http::Request::post(&config.bookmarks_endpoint())
            .header("apikey", &config.anon_key)
            .header("Authorization", &super::bearer(&session.access_token))
            .header("Prefer", "return=minimal")
            .json(&payload)
            .map_err(|e| RemoteError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteError::new(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::new(error_message(status, &body)));
        }
        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (config, session, url, title);
        Err(RemoteError::new(NOT_IN_BROWSER))
    }
}

/// Delete a bookmark unconditionally. No existence check, no confirmation,
/// no undo; the list updates via the next notification-triggered refetch.
///
/// # Errors
///
/// Returns the service-provided message on any transport or service failure.
pub async fn delete(config: &Config, session: &Session, id: &str) -> Result<(), RemoteError> {
    #[cfg(feature = "web")]
    {
        let url = format!("{}?{}", config.bookmarks_endpoint(), delete_query(id));
        let resp = gloo_net::http::Request::delete(&url)
            .header("apikey", &config.anon_key)
            .header("Authorization", &super::bearer(&session.access_token))
            .send()
            .await
            .map_err(|e| RemoteError::new(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::new(error_message(status, &body)));
        }
        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (config, session, id);
        Err(RemoteError::new(NOT_IN_BROWSER))
    }
}

//! Remote session client for the hosted auth service.
//!
//! Wraps redirect-based OAuth sign-in, sign-out, current-session retrieval,
//! and a session-change listener registry. Tokens arrive on the callback
//! route in the URL fragment; the resolved session persists in
//! `localStorage` so reloads stay signed in.
//!
//! ERROR HANDLING
//! ==============
//! `get_current_session` treats every failure as absence: transport errors
//! resolve to "no session" instead of surfacing, and a rejected token clears
//! the stored copy. Only the pre-redirect half of sign-in and the callback
//! completion can surface an error to the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::Config;
use crate::net::types::{RemoteError, Session};

#[cfg(feature = "web")]
use crate::net::types::AuthUser;

/// Fixed localStorage key for the persisted session.
#[cfg(feature = "web")]
const STORAGE_KEY: &str = "marksync_session";

type SessionListener = Rc<dyn Fn(Option<Session>)>;

thread_local! {
    static LISTENERS: RefCell<Vec<(u64, SessionListener)>> = const { RefCell::new(Vec::new()) };
    static NEXT_LISTENER_ID: Cell<u64> = const { Cell::new(1) };
}

/// Handle for a registered session-change listener.
///
/// Unsubscribing is the owner's responsibility on teardown; afterwards the
/// callback is guaranteed not to fire again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSubscription {
    id: u64,
}

impl SessionSubscription {
    /// Remove the listener from the registry.
    pub fn unsubscribe(self) {
        LISTENERS.with(|listeners| listeners.borrow_mut().retain(|(id, _)| *id != self.id));
    }
}

/// Register a listener invoked on every session transition: sign-in
/// completion, sign-out, or the service rejecting the stored token.
pub fn on_session_change(callback: impl Fn(Option<Session>) + 'static) -> SessionSubscription {
    let id = NEXT_LISTENER_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    LISTENERS.with(|listeners| listeners.borrow_mut().push((id, Rc::new(callback))));
    SessionSubscription { id }
}

/// Invoke every registered listener with the new session value.
///
/// The registry is snapshotted first and membership is re-checked before
/// each call, so a callback may unsubscribe listeners (itself included)
/// mid-notification without any unsubscribed callback firing.
fn notify_session_change(session: &Option<Session>) {
    let snapshot: Vec<(u64, SessionListener)> =
        LISTENERS.with(|listeners| listeners.borrow().clone());
    for (id, callback) in snapshot {
        let still_registered =
            LISTENERS.with(|listeners| listeners.borrow().iter().any(|(lid, _)| *lid == id));
        if still_registered {
            callback(session.clone());
        }
    }
}

fn sign_in_failed() -> RemoteError {
    RemoteError::new("Sign-in failed. Please try again.")
}

#[cfg(any(test, feature = "web"))]
fn authorize_url(base: &str, provider: &str, encoded_redirect: &str) -> String {
    format!("{base}/auth/v1/authorize?provider={provider}&redirect_to={encoded_redirect}")
}

#[cfg(feature = "web")]
fn stored_session() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

#[cfg(feature = "web")]
fn store_session(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(session) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
}

#[cfg(feature = "web")]
fn clear_stored_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Resolve the current session, revalidating the stored token against the
/// auth service.
///
/// Returns `None` on any failure: transport errors are treated as absence,
/// and a rejected token (401/403) also clears the stored session.
pub async fn get_current_session(config: &Config) -> Option<Session> {
    #[cfg(feature = "web")]
    {
        let stored = stored_session()?;
        let resp = gloo_net::http::Request::get(&config.auth_endpoint("user"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &super::bearer(&stored.access_token))
            .send()
            .await
            .ok()?;
        if resp.status() == 401 || resp.status() == 403 {
            clear_stored_session();
            return None;
        }
        if !resp.ok() {
            return None;
        }
        let user: AuthUser = resp.json().await.ok()?;
        Some(Session {
            user_id: user.id,
            access_token: stored.access_token,
        })
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = config;
        None
    }
}

/// Begin the redirect-based OAuth flow. On success the browser navigates to
/// the identity provider and returns through the callback route.
///
/// # Errors
///
/// Returns an error only when the redirect itself cannot be issued.
pub fn sign_in_with_redirect(
    config: &Config,
    provider: &str,
    redirect_to: &str,
) -> Result<(), RemoteError> {
    #[cfg(feature = "web")]
    {
        let encoded = String::from(js_sys::encode_uri_component(redirect_to));
        let url = authorize_url(&config.url, provider, &encoded);
        let window = web_sys::window().ok_or_else(sign_in_failed)?;
        window.location().set_href(&url).map_err(|_| sign_in_failed())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (config, provider, redirect_to);
        Err(sign_in_failed())
    }
}

/// Invalidate the session. Treated as fire-and-forget success: the remote
/// logout is attempted, local state is cleared, and listeners are notified
/// with an absent session regardless of the remote outcome.
pub async fn sign_out(config: &Config, session: &Session) {
    #[cfg(feature = "web")]
    {
        let _ = gloo_net::http::Request::post(&config.auth_endpoint("logout"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &super::bearer(&session.access_token))
            .send()
            .await;
        clear_stored_session();
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (config, session);
    }
    notify_session_change(&None);
}

/// Tokens extracted from the OAuth callback fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Parse the `#access_token=…` fragment the auth service appends to the
/// callback URL. A fragment carrying `error`/`error_description` (or no
/// access token at all) is a failed sign-in.
///
/// # Errors
///
/// Returns the static sign-in failure message; the provider's error detail
/// is not surfaced.
pub fn parse_callback_fragment(fragment: &str) -> Result<CallbackTokens, RemoteError> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut failed = false;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value.to_owned()),
            "refresh_token" if !value.is_empty() => refresh_token = Some(value.to_owned()),
            "error" | "error_description" => failed = true,
            _ => {}
        }
    }
    if failed {
        return Err(sign_in_failed());
    }
    match access_token {
        Some(access_token) => Ok(CallbackTokens {
            access_token,
            refresh_token,
        }),
        None => Err(sign_in_failed()),
    }
}

/// Complete the redirect flow on the callback route: extract tokens from the
/// URL fragment, resolve the user they belong to, persist the session, and
/// notify listeners.
///
/// # Errors
///
/// Returns an error when the fragment carries a provider error, no token, or
/// the user lookup fails.
pub async fn complete_sign_in(config: &Config) -> Result<Session, RemoteError> {
    #[cfg(feature = "web")]
    {
        let fragment = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let tokens = parse_callback_fragment(&fragment)?;
        let resp = gloo_net::http::Request::get(&config.auth_endpoint("user"))
            .header("apikey", &config.anon_key)
            .header("Authorization", &super::bearer(&tokens.access_token))
            .send()
            .await
            .map_err(|_| sign_in_failed())?;
        if !resp.ok() {
            return Err(sign_in_failed());
        }
        let user: AuthUser = resp.json().await.map_err(|_| sign_in_failed())?;
        let session = Session {
            user_id: user.id,
            access_token: tokens.access_token,
        };
        store_session(&session);
        notify_session_change(&Some(session.clone()));
        Ok(session)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = config;
        Err(sign_in_failed())
    }
}

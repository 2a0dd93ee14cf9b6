//! Environment configuration for the hosted service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The service endpoint and public API key are baked in at compile time, the
//! same way the original deployment injects its public environment values.
//! When either is absent the UI disables sign-in and shows a setup banner
//! instead of attempting any remote call.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Hosted-service connection values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Service base URL, e.g. `https://abcdefgh.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
}

impl Config {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.into(),
        }
    }

    /// Resolve configuration from compile-time environment values.
    ///
    /// Returns `None` when `SUPABASE_URL` or `SUPABASE_ANON_KEY` was missing
    /// at build time.
    pub fn from_env() -> Option<Self> {
        let url = option_env!("SUPABASE_URL")?;
        let anon_key = option_env!("SUPABASE_ANON_KEY")?;
        Some(Self::new(url, anon_key))
    }

    /// REST endpoint for the bookmarks table.
    pub fn bookmarks_endpoint(&self) -> String {
        format!("{}/rest/v1/bookmarks", self.url)
    }

    /// Auth-service endpoint for the given route, e.g. `user` or `logout`.
    pub fn auth_endpoint(&self, route: &str) -> String {
        format!("{}/auth/v1/{route}", self.url)
    }

    /// Realtime websocket URL carrying the public API key.
    pub fn realtime_endpoint(&self) -> String {
        let ws_base = if let Some(rest) = self.url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.url.clone()
        };
        format!(
            "{ws_base}/realtime/v1/websocket?apikey={}&vsn=1.0.0",
            self.anon_key
        )
    }
}

//! OAuth callback route.
//!
//! The auth service redirects back here with tokens in the URL fragment; the
//! page resolves the pending session and returns home, or swaps in a static
//! failure message and stays put. There is no retry affordance.

use leptos::prelude::*;
#[cfg(feature = "web")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "web")]
use crate::config::Config;

/// Copy shown while the pending session resolves.
const PENDING_MESSAGE: &str = "Completing sign-in...";
/// Copy shown when completion fails.
const FAILURE_MESSAGE: &str = "Sign-in failed. Please try again.";

/// Landing view for the OAuth redirect target.
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let message = RwSignal::new(PENDING_MESSAGE.to_owned());
    let navigate = use_navigate();

    #[cfg(feature = "web")]
    {
        let config = expect_context::<Option<Config>>();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let Some(config) = config else {
                message.set(FAILURE_MESSAGE.to_owned());
                return;
            };
            match crate::net::session::complete_sign_in(&config).await {
                Ok(_) => navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                ),
                Err(_) => message.set(FAILURE_MESSAGE.to_owned()),
            }
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = navigate;

    view! {
        <div class="callback-page">
            <p class="callback-page__message">{move || message.get()}</p>
        </div>
    }
}

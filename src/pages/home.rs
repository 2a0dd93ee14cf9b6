//! Home page — the bookmark view controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session phase machine: mount resolves the current session and
//! registers the session-change listener; a signed-in session triggers the
//! initial list fetch plus the live change subscription; sign-out, session
//! loss, or unmount tears both down. Every remote failure lands in the
//! banner and leaves the rest of the view interactive.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::components::bookmark_card::BookmarkCard;
use crate::components::bookmark_form::BookmarkForm;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::Config;
use crate::net::bookmarks;
use crate::net::realtime::ChangeSubscription;
use crate::net::session as session_client;
use crate::state::bookmarks::BookmarksState;
use crate::state::session::{SessionPhase, SessionState};

/// Banner shown when the build is missing its service configuration.
const MISSING_CONFIG_MESSAGE: &str =
    "Missing service configuration. Set SUPABASE_URL and SUPABASE_ANON_KEY at build time; see the README setup steps.";

/// Redirect target for the OAuth flow, derived from the page origin.
#[cfg(any(test, feature = "web"))]
fn callback_redirect_target(origin: &str) -> String {
    format!("{origin}/auth/callback")
}

/// Home page — the session check, the sign-in card, or the bookmark list.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<Option<Config>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let bookmarks_state = expect_context::<RwSignal<BookmarksState>>();

    let url = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let inserting = Signal::derive(move || bookmarks_state.get().inserting);

    let config_missing = config.is_none();
    let mounted = Arc::new(AtomicBool::new(true));
    let channel: Arc<Mutex<Option<ChangeSubscription>>> = Arc::new(Mutex::new(None));

    session.update(SessionState::begin_check);

    // Initial resolution: query the auth service, or land signed out
    // immediately when configuration is missing.
    #[cfg(feature = "web")]
    {
        if let Some(config) = config.clone() {
            let mounted = mounted.clone();
            leptos::task::spawn_local(async move {
                let resolved = session_client::get_current_session(&config).await;
                if mounted.load(Ordering::Relaxed) {
                    session.update(|s| s.resolve(resolved));
                }
            });
        } else {
            session.update(|s| s.resolve(None));
        }
    }
    #[cfg(not(feature = "web"))]
    session.update(|s| s.resolve(None));

    // Session transitions: sign-in completion, sign-out, token rejection.
    let listener = {
        let mounted = mounted.clone();
        session_client::on_session_change(move |next| {
            if mounted.load(Ordering::Relaxed) {
                session.update(|s| s.resolve(next));
            }
        })
    };

    // Entering the signed-in phase loads the list and opens the change
    // channel; leaving it closes the channel and drops the rows.
    #[cfg(feature = "web")]
    {
        let config = config.clone();
        let mounted = mounted.clone();
        let channel = channel.clone();
        Effect::new(move || {
            let state = session.get();
            if state.is_signed_in() {
                let Ok(mut slot) = channel.lock() else {
                    return;
                };
                if slot.is_some() {
                    return;
                }
                let (Some(config), Some(active)) = (config.clone(), state.session.clone()) else {
                    return;
                };
                load_bookmarks(&config, &active, bookmarks_state, &mounted);
                let refetch_config = config.clone();
                let refetch_session = active.clone();
                let refetch_mounted = mounted.clone();
                let subscription =
                    crate::net::realtime::subscribe_to_changes(&config, &active, move || {
                        load_bookmarks(
                            &refetch_config,
                            &refetch_session,
                            bookmarks_state,
                            &refetch_mounted,
                        );
                    });
                *slot = Some(subscription);
            } else if let Some(subscription) = channel.lock().ok().and_then(|mut slot| slot.take())
            {
                subscription.unsubscribe();
                bookmarks_state.update(BookmarksState::clear);
            }
        });
    }

    {
        let mounted = mounted.clone();
        let channel = channel.clone();
        on_cleanup(move || {
            mounted.store(false, Ordering::Relaxed);
            listener.unsubscribe();
            if let Some(subscription) = channel.lock().ok().and_then(|mut slot| slot.take()) {
                subscription.unsubscribe();
            }
        });
    }

    let on_login = Callback::new({
        let config = config.clone();
        move |()| {
            bookmarks_state.update(|b| b.error = None);
            let Some(config) = config.clone() else {
                bookmarks_state.update(|b| b.fail(MISSING_CONFIG_MESSAGE));
                return;
            };
            #[cfg(feature = "web")]
            {
                let origin = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .unwrap_or_default();
                let target = callback_redirect_target(&origin);
                if let Err(e) = session_client::sign_in_with_redirect(&config, "google", &target) {
                    bookmarks_state.update(|b| b.fail(e.message()));
                }
            }
            #[cfg(not(feature = "web"))]
            let _ = config;
        }
    });

    let on_logout = Callback::new({
        let config = config.clone();
        move |()| {
            #[cfg(feature = "web")]
            {
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    if let (Some(config), Some(active)) =
                        (config, session.get_untracked().session)
                    {
                        session_client::sign_out(&config, &active).await;
                    } else {
                        // Nothing to invalidate remotely; still drop the
                        // local session through the listener path.
                        session.update(|s| s.resolve(None));
                    }
                });
            }
            #[cfg(not(feature = "web"))]
            let _ = &config;
        }
    });

    let on_submit = Callback::new({
        let config = config.clone();
        let mounted = mounted.clone();
        move |()| {
            bookmarks_state.update(|b| b.error = None);
            let Some(config) = config.clone() else {
                return;
            };
            let Some(active) = session.get_untracked().session else {
                return;
            };
            match bookmarks::validate_bookmark_input(&url.get_untracked(), &title.get_untracked()) {
                Err(e) => bookmarks_state.update(|b| b.fail(e.message())),
                Ok((trimmed_url, trimmed_title)) => {
                    bookmarks_state.update(|b| b.inserting = true);
                    #[cfg(feature = "web")]
                    {
                        let mounted = mounted.clone();
                        leptos::task::spawn_local(async move {
                            let result =
                                bookmarks::insert(&config, &active, &trimmed_url, &trimmed_title)
                                    .await;
                            if !mounted.load(Ordering::Relaxed) {
                                return;
                            }
                            bookmarks_state.update(|b| b.inserting = false);
                            match result {
                                Ok(()) => {
                                    // The new row arrives with the
                                    // notification-triggered refetch; only
                                    // the form clears here.
                                    url.set(String::new());
                                    title.set(String::new());
                                }
                                Err(e) => bookmarks_state.update(|b| b.fail(e.message())),
                            }
                        });
                    }
                    #[cfg(not(feature = "web"))]
                    {
                        let _ = (config, active, trimmed_url, trimmed_title, &mounted);
                        bookmarks_state.update(|b| b.inserting = false);
                    }
                }
            }
        }
    });

    let on_delete = Callback::new({
        let config = config.clone();
        let mounted = mounted.clone();
        move |id: String| {
            bookmarks_state.update(|b| b.error = None);
            let Some(config) = config.clone() else {
                return;
            };
            let Some(active) = session.get_untracked().session else {
                return;
            };
            #[cfg(feature = "web")]
            {
                let mounted = mounted.clone();
                leptos::task::spawn_local(async move {
                    // No optimistic removal: success relies on the change
                    // notification to refresh the list.
                    if let Err(e) = bookmarks::delete(&config, &active, &id).await
                        && mounted.load(Ordering::Relaxed)
                    {
                        bookmarks_state.update(|b| b.fail(e.message()));
                    }
                });
            }
            #[cfg(not(feature = "web"))]
            let _ = (config, active, id, &mounted);
        }
    });

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <div>
                    <p class="home-page__kicker">"Smart Bookmark App"</p>
                    <h1 class="home-page__title">"Your bookmarks"</h1>
                </div>
                <div class="home-page__actions">
                    <ThemeToggle/>
                    <Show when=move || session.get().is_signed_in()>
                        <button class="btn" on:click=move |_| on_logout.run(())>
                            "Log out"
                        </button>
                    </Show>
                </div>
            </header>

            <Show when=move || config_missing>
                <div class="banner banner--config">{MISSING_CONFIG_MESSAGE}</div>
            </Show>

            <Show when=move || bookmarks_state.get().error.is_some()>
                <div class="banner banner--error">
                    {move || bookmarks_state.get().error.unwrap_or_default()}
                </div>
            </Show>

            {move || match session.get().phase {
                SessionPhase::Uninitialized | SessionPhase::CheckingSession => {
                    view! { <p class="home-page__pending">"Checking session..."</p> }.into_any()
                }
                SessionPhase::SignedOut => {
                    view! {
                        <div class="signin-card">
                            <p>"Sign in with Google to manage your private bookmarks."</p>
                            <button class="btn btn--primary" on:click=move |_| on_login.run(())>
                                "Continue with Google"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                SessionPhase::SignedIn => {
                    view! {
                        <div class="home-page__content">
                            <BookmarkForm url=url title=title inserting=inserting on_submit=on_submit/>
                            <div class="bookmark-list">
                                <Show
                                    when=move || !bookmarks_state.get().items.is_empty()
                                    fallback=|| {
                                        view! {
                                            <div class="bookmark-list__empty">
                                                "No bookmarks yet. Add your first one above."
                                            </div>
                                        }
                                    }
                                >
                                    {move || {
                                        bookmarks_state
                                            .get()
                                            .items
                                            .into_iter()
                                            .map(|bookmark| {
                                                view! {
                                                    <BookmarkCard bookmark=bookmark on_delete=on_delete/>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

/// Fetch the owner's rows and fold the result into view state, unless the
/// page unmounted while the request was in flight.
#[cfg(feature = "web")]
fn load_bookmarks(
    config: &Config,
    session: &crate::net::types::Session,
    bookmarks_state: RwSignal<BookmarksState>,
    mounted: &Arc<AtomicBool>,
) {
    let config = config.clone();
    let session = session.clone();
    let mounted = mounted.clone();
    leptos::task::spawn_local(async move {
        let result = bookmarks::list(&config, &session).await;
        if !mounted.load(Ordering::Relaxed) {
            return;
        }
        match result {
            Ok(items) => bookmarks_state.update(|b| b.apply_list(items)),
            Err(e) => bookmarks_state.update(|b| b.fail(e.message())),
        }
    });
}

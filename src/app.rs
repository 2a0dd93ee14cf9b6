//! Root component: context providers, router, and theme bootstrap.
//!
//! ARCHITECTURE
//! ============
//! All shared state lives in context-provided signals so route components
//! stay prop-free; configuration is resolved once and provided as a plain
//! `Option<Config>` value.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::Config;
use crate::pages::callback::AuthCallbackPage;
use crate::pages::home::HomePage;
use crate::state::bookmarks::BookmarksState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Application shell mounted at the document body.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Config::from_env());
    let session = RwSignal::new(SessionState::default());
    let bookmarks = RwSignal::new(BookmarksState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(bookmarks);
    provide_context(ui);

    // Resolve and apply the persisted theme before first paint.
    #[cfg(feature = "web")]
    {
        let initial = crate::util::theme::read_preference();
        crate::util::theme::apply(initial);
        ui.update(|u| u.theme = initial);
    }

    view! {
        <Title text="Smart Bookmark App"/>
        <Router>
            <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/auth/callback") view=AuthCallbackPage/>
            </Routes>
        </Router>
    }
}

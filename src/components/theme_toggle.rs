//! Header control for switching between light and dark themes.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme::{self, Theme};

/// Toggle button reflecting and mutating the shared theme preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let label = move || format!("Switch to {} mode", ui.get().theme.toggled().as_str());

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let next = theme::toggle(ui.get().theme);
                ui.update(|u| u.theme = next);
            }
            title="Toggle theme"
            aria-label=label
        >
            {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}

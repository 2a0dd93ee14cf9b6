//! Submission form for new bookmarks.
//!
//! Field contents live in the parent so a failed insert retains them; only a
//! successful insert clears the inputs.

use leptos::prelude::*;

/// URL + title form. Submission is delegated through `on_submit`; the
/// `inserting` flag disables and relabels the button while a request is in
/// flight.
#[component]
pub fn BookmarkForm(
    url: RwSignal<String>,
    title: RwSignal<String>,
    inserting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="bookmark-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="bookmark-form__label">
                "URL"
                <input
                    class="bookmark-form__input"
                    type="text"
                    placeholder="https://example.com"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </label>
            <label class="bookmark-form__label">
                "Title"
                <input
                    class="bookmark-form__input"
                    type="text"
                    placeholder="Example"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || inserting.get()>
                {move || if inserting.get() { "Adding..." } else { "Add bookmark" }}
            </button>
        </form>
    }
}

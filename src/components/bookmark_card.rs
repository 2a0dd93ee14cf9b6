//! Row component for a single bookmark.
//!
//! DESIGN
//! ======
//! Deletion is immediate: no confirmation dialog and no undo. The row is not
//! removed optimistically; the list refreshes on the next change
//! notification.

use leptos::prelude::*;

use crate::net::types::Bookmark;

/// One bookmark row: address, title, and its delete affordance.
#[component]
pub fn BookmarkCard(bookmark: Bookmark, on_delete: Callback<String>) -> impl IntoView {
    let id = bookmark.id.clone();

    view! {
        <div class="bookmark-card">
            <div class="bookmark-card__text">
                <a class="bookmark-card__url" href=bookmark.url.clone() rel="noreferrer">
                    {bookmark.url.clone()}
                </a>
                <p class="bookmark-card__title">{bookmark.title.clone()}</p>
            </div>
            <button
                class="btn bookmark-card__delete"
                on:click=move |_| on_delete.run(id.clone())
                title="Delete bookmark"
                aria-label="Delete bookmark"
            >
                "Delete"
            </button>
        </div>
    }
}

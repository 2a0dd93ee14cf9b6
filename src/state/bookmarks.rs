//! Bookmark-list view state.
//!
//! DESIGN
//! ======
//! Failures never roll back the displayed list; they only set the banner
//! message. The list itself changes exclusively through full refetches
//! triggered by change notifications.

#[cfg(test)]
#[path = "bookmarks_test.rs"]
mod bookmarks_test;

use crate::net::types::Bookmark;

/// Shared list state for the home page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarksState {
    /// Current rows, newest `created_at` first.
    pub items: Vec<Bookmark>,
    /// True while an insert is in flight (drives the submit button).
    pub inserting: bool,
    /// Current banner message; replaced by the next action.
    pub error: Option<String>,
}

impl BookmarksState {
    /// Replace the list with a fresh fetch result and clear the banner.
    pub fn apply_list(&mut self, items: Vec<Bookmark>) {
        self.items = items;
        self.error = None;
    }

    /// Surface a failure message; the previously displayed rows stay.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Drop every row and pending message (signed-out transition).
    pub fn clear(&mut self) {
        self.items.clear();
        self.inserting = false;
        self.error = None;
    }
}

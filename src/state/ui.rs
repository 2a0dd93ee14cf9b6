//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of domain state (`session`,
//! `bookmarks`) so rendering controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Presentation state provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Active color theme; persisted by `util::theme`.
    pub theme: Theme,
}

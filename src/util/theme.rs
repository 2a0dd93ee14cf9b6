//! Theme preference store.
//!
//! Reads the `light`/`dark` preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Writes persist the choice
//! and restyle the page synchronously. Requires a browser environment; when
//! storage is unavailable the preference simply does not survive reloads.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Fixed localStorage key for the theme flag.
#[cfg(feature = "web")]
const STORAGE_KEY: &str = "theme";

/// Process-wide presentation preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage and attribute value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but the two known strings is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the theme preference from localStorage.
///
/// A stored value wins outright; otherwise the system dark/light preference
/// applies, and light is the final fallback.
pub fn read_preference() -> Theme {
    #[cfg(feature = "web")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&value) {
                    return theme;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "web"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// Persist the preference and restyle the page synchronously.
pub fn write(theme: Theme) {
    apply(theme);
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
}

/// Flip the preference, persist it, and return the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    write(next);
    next
}

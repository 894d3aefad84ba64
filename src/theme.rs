//! Theme value domain and the pure state transitions.
//!
//! The persisted wire contract is the literal strings `"dark"` and
//! `"light"` under the `theme` key; changing either would orphan every
//! preference already stored in visitors' browsers.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two visual modes the page can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Map a stored preference to a theme.
    ///
    /// `None` means no preference was ever saved: the caller must leave the
    /// page untouched rather than assume `Light`. A present value selects
    /// `Dark` if and only if it equals `"dark"`; anything else is `Light`.
    pub fn from_stored(stored: Option<&str>) -> Option<Theme> {
        stored.map(|v| if v == "dark" { Theme::Dark } else { Theme::Light })
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The string persisted for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The toggle control's label while this theme is active.
    ///
    /// The label names the mode a click would switch to, so it is the
    /// inverse of the active theme. Locale-fixed by the host page.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Modo Noche",
            Theme::Dark => "Modo Día",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

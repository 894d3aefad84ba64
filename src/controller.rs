//! Theme toggle controller.
//!
//! DESIGN
//! ======
//! The controller is the decision half of the toggle: it owns the current
//! theme and the preference store, and answers "what should the page look
//! like now" as plain data. Applying that answer to the DOM (class on the
//! root element, text on the button) is left to the shim in [`crate::dom`],
//! so everything here runs under native `cargo test`.

use crate::prefs::{PreferenceStore, THEME_KEY};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// The DOM mutations a state change calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiUpdate {
    /// Whether the `dark-mode` class should be present on the page root.
    pub dark: bool,
    /// Text to assign to the toggle control.
    pub label: &'static str,
}

impl UiUpdate {
    fn for_theme(theme: Theme) -> Self {
        Self {
            dark: theme.is_dark(),
            label: theme.label(),
        }
    }
}

/// Controller for a single toggle control over one preference store.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Controller in the default (light) state, before any load.
    pub fn new(store: S) -> Self {
        Self {
            store,
            theme: Theme::default(),
        }
    }

    /// Page-load initialization: adopt the persisted preference, if any.
    ///
    /// Returns `None` when no preference is stored, in which case the page
    /// keeps its default presentation and no write occurs. Never writes to
    /// the store.
    pub fn load(&mut self) -> Option<UiUpdate> {
        let stored = self.store.get(THEME_KEY);
        let theme = Theme::from_stored(stored.as_deref())?;
        log::debug!("loaded theme preference: {}", theme.as_str());
        self.theme = theme;
        Some(UiUpdate::for_theme(theme))
    }

    /// Click handler: flip the theme, persist it, report the new look.
    pub fn toggle(&mut self) -> UiUpdate {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());
        log::debug!("theme toggled to: {}", self.theme.as_str());
        UiUpdate::for_theme(self.theme)
    }

    /// Currently active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

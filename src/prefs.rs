//! Preference persistence behind a minimal key-value interface.
//!
//! The browser's `localStorage` is global mutable state; hiding it behind
//! `PreferenceStore` lets the controller run against an in-memory
//! substitute in native tests. The `LocalStore` implementation lives in
//! [`crate::dom`] since it needs a browser environment.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// Storage key the theme preference is persisted under.
pub const THEME_KEY: &str = "theme";

/// Synchronous string-keyed persistence, the shape of `localStorage`.
///
/// Implementations swallow storage failures: a denied read behaves as
/// "no value stored" and a denied write is dropped. The toggle keeps
/// working within the page; it just stops persisting.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for tests and non-browser builds.
///
/// Tracks how many writes were issued so tests can assert that loading a
/// page with no stored preference performs no write at all.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a value under [`THEME_KEY`].
    pub fn with_theme(value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(THEME_KEY.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls issued since construction.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
    }
}

//! Persisted font preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active font lives under one `localStorage` key as a plain identifier.
//! `FontPreferences` wraps a `PreferenceStore` so the switcher can be given
//! browser storage in hydrate builds and `MemoryStore` everywhere else.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::FontError;

/// String key-value storage.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing stored.
    fn get(&self, key: &str) -> Result<Option<String>, FontError>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), FontError>;
}

/// In-memory store. Clones share the same map, so a clone handed to a second
/// switcher behaves like the same page's storage after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FontError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FontError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The saved font identifier behind a fixed key.
#[derive(Clone, Debug)]
pub struct FontPreferences<S> {
    store: S,
    key: String,
    default_font: String,
}

impl<S: PreferenceStore> FontPreferences<S> {
    pub fn new(store: S, key: impl Into<String>, default_font: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            default_font: default_font.into(),
        }
    }

    /// Stored identifier, if any.
    ///
    /// # Errors
    ///
    /// Propagates the store's failure.
    pub fn load(&self) -> Result<Option<String>, FontError> {
        self.store.get(&self.key)
    }

    /// Persist `value` as the active identifier.
    ///
    /// # Errors
    ///
    /// Propagates the store's failure.
    pub fn save(&self, value: &str) -> Result<(), FontError> {
        self.store.set(&self.key, value)
    }

    /// Stored identifier, or the default when nothing is stored or storage fails.
    pub fn current(&self) -> String {
        match self.load() {
            Ok(Some(value)) if !value.is_empty() => value,
            _ => self.default_font.clone(),
        }
    }
}

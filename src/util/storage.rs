//! Preference persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme toggle is the only writer. Browser builds use `localStorage`;
//! host builds and tests use [`MemoryStore`]. Storage failures (private mode,
//! quota, disabled storage) are logged and otherwise ignored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value store with `localStorage` semantics.
pub trait PreferenceStore {
    /// Stored value for `key`; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, best effort.
    fn set(&self, key: &str, value: &str);
}

/// In-process store used off-browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", crate::error::PortfolioError::describe_js(&e));
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key} failed: {}", crate::error::PortfolioError::describe_js(&e));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {}", crate::error::PortfolioError::describe_js(&e));
        }
    }
}

//! Key-value string storage backends
//!
//! The leaderboard persists through the [`StringStore`] capability instead
//! of touching LocalStorage directly, so everything above this module runs
//! unchanged in tests and headless builds.

use std::cell::RefCell;
use std::collections::HashMap;

/// Get/set over text - the persistent-storage capability the leaderboard needs
pub trait StringStore {
    /// Read the value under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`; failures (quota, private mode) are swallowed
    fn set(&self, key: &str, value: &str);
}

/// Browser LocalStorage backend (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Grab LocalStorage if the current context has it
    ///
    /// Returns `None` outside a browser window or when storage access is
    /// denied; callers fall back to detached (no-op) mode.
    pub fn detect() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|inner| Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl StringStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.inner.set_item(key, value);
    }
}

/// In-memory backend for tests and native builds
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

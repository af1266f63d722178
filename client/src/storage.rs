//! Persisted client storage behind a small capability interface.
//!
//! DESIGN
//! ======
//! The session store only ever needs get/set/remove on string keys, so that
//! is the whole trait. Tests and off-wasm builds substitute the in-memory
//! fake; the browser build wraps `localStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-keyed persisted storage.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory fake used by tests and as the off-wasm fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys; used by tests to assert cleanup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`. Storage failures (private mode, quota) degrade to
/// "no value" rather than erroring.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::Storage as _;
        gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        use gloo_storage::Storage as _;
        let _ = gloo_storage::LocalStorage::raw().set_item(key, value);
    }

    fn remove(&self, key: &str) {
        use gloo_storage::Storage as _;
        let _ = gloo_storage::LocalStorage::raw().remove_item(key);
    }
}

/// The storage backend for the current build target.
#[must_use]
pub fn default_backend() -> Rc<dyn Storage> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(MemoryStorage::new())
    }
}

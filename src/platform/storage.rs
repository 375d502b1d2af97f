//! Durable key-value storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persisted stores talk to storage only through [`KeyValueStorage`], so the
//! browser/server split is decided once when the [`super::Environment`] is
//! built instead of inside every store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;

/// String-keyed, string-valued storage scoped to the page origin.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value under `key`, `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_owned()))
    }

    fn op_error(key: &str, err: wasm_bindgen::JsValue) -> StoreError {
        StoreError::Storage { key: key.to_owned(), message: format!("{err:?}") }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| Self::op_error(key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| Self::op_error(key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| Self::op_error(key, e))
    }
}

/// In-process storage. Clones share the same map, which lets a test "reload"
/// by building a fresh store over the same backing storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries: Arc::new(Mutex::new(map)) }
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// Storage for non-browser contexts: nothing is read, writes are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedStorage;

impl KeyValueStorage for DetachedStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

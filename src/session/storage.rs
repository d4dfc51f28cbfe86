//! Persisted key/value storage for the session.
//!
//! `BrowserStorage` wraps `window.localStorage` in the `hydrate` build and is
//! an always-empty no-op elsewhere (SSR renders the signed-out view).
//! `MemoryStorage` backs tests and any non-browser host.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::AuthError;

/// Durable string storage surviving page reloads.
pub trait SessionStorage {
    /// Read `key`; `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// `localStorage` of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, AuthError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AuthError::Storage("localStorage unavailable".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> AuthError {
    AuthError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        storage
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lock().is_ok_and(|entries| entries.contains_key(key))
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, AuthError> {
        self.entries.lock().map_err(|_| AuthError::Storage("memory storage poisoned".to_owned()))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

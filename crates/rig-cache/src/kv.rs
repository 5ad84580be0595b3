//! Key-value store wrapper with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe store with JSON serialization for any `Serialize` +
/// `DeserializeOwned` value.
///
/// Backed by Spin's Key-Value Store on wasm32 and by an in-memory map on
/// other targets, so host builds and tests get real read-your-writes
/// behavior instead of a stub.
pub struct KvStore {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    store: std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

#[cfg(target_arch = "wasm32")]
impl KvStore {
    /// Open the default key-value store.
    pub fn open_default() -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(CacheError::StoreError(e.to_string())),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store
            .set(key, &bytes)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    /// Delete a value. Deleting a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store
            .delete(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    /// Write raw bytes (used by tests to simulate corrupt payloads).
    pub fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        self.store
            .set(key, bytes)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KvStore {
    /// Open the default key-value store.
    pub fn open_default() -> Result<Self, CacheError> {
        Ok(Self {
            store: std::sync::Mutex::new(std::collections::HashMap::new()),
        })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let map = self
            .store
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        match map.get(key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }

    /// Delete a value. Deleting a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut map = self
            .store
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        map.remove(key);
        Ok(())
    }

    /// Write raw bytes (used by tests to simulate corrupt payloads).
    pub fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError> {
        let mut map = self
            .store
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        map.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

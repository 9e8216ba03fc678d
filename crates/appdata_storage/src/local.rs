//! Flat string-store backend.

use crate::backend::{FetchBackend, PersistBackend, RawContent};
use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// A synchronous, flat, string-to-string key space.
///
/// The abstraction a browser-style local store exposes: get, set,
/// remove against a single namespace of text keys and text values.
/// Implement this to bridge whatever host store is actually present.
pub trait StringStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: String);

    /// Removes the entry under `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// An in-process [`StringStore`] over a hash map.
#[derive(Debug, Default)]
pub struct MemoryStringStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStringStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StringStore for MemoryStringStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// A storage backend over a flat string store.
///
/// Text-only and writable. Full keys carry no extension and are used
/// as store keys directly; every value arrives as codec wire text,
/// because the capability flag forces binary data into its tagged
/// base64 form upstream.
#[derive(Debug)]
pub struct StringStoreBackend<S> {
    store: S,
    prefix: String,
}

impl<S: StringStore> StringStoreBackend<S> {
    /// Creates a backend over `store` with the given key prefix.
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: StringStore> FetchBackend for StringStoreBackend<S> {
    fn binary_capable(&self) -> bool {
        false
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    async fn fetch(&self, full_key: &str, _as_binary: bool) -> StorageResult<Option<RawContent>> {
        Ok(self.store.get(full_key).map(RawContent::Text))
    }
}

#[async_trait]
impl<S: StringStore> PersistBackend for StringStoreBackend<S> {
    async fn persist(&self, full_key: &str, content: RawContent) -> StorageResult<()> {
        match content {
            RawContent::Text(text) => {
                self.store.set(full_key, text);
                Ok(())
            }
            RawContent::Bytes(_) => Err(StorageError::BinaryNotSupported {
                key: full_key.to_string(),
            }),
        }
    }

    async fn remove(&self, full_key: &str) -> StorageResult<()> {
        self.store.remove(full_key);
        Ok(())
    }
}

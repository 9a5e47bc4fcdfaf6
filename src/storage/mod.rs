//! Key-value persistence
//!
//! Plugin options and per-player language preferences are flat string
//! mappings. The core only talks to [`KeyValueStore`]; the file format lives
//! behind it.

pub mod memory;
pub mod yaml;

pub use memory::MemoryStore;
pub use yaml::YamlStore;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::utils::errors::Result;

/// Flat string key-value store with explicit persistence
pub trait KeyValueStore {
    /// Get the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Get the value stored under `key`, or `default` when absent
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Insert or replace a value; not persisted until [`save`](Self::save)
    fn set(&mut self, key: &str, value: &str);

    /// Remove a value, returning whether it existed
    fn remove(&mut self, key: &str) -> bool;

    /// All keys in a stable order
    fn keys(&self) -> Vec<String>;

    /// Persist the current contents
    fn save(&self) -> Result<()>;

    /// Discard in-memory contents and re-read the backing storage
    fn reload(&mut self) -> Result<()>;
}

/// Thread-safe trait object behind a [`SharedStore`]
pub type DynStore = dyn KeyValueStore + Send + Sync;

/// Store handle shared between the resolver and the command layer
pub type SharedStore = Arc<RwLock<DynStore>>;

/// Wrap a store for sharing
pub fn shared<S>(store: S) -> SharedStore
where
    S: KeyValueStore + Send + Sync + 'static,
{
    Arc::new(RwLock::new(store))
}

/// Read access that survives a poisoned lock; stores hold plain data
pub fn read(store: &SharedStore) -> RwLockReadGuard<'_, DynStore> {
    store.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write access that survives a poisoned lock
pub fn write(store: &SharedStore) -> RwLockWriteGuard<'_, DynStore> {
    store.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Set a value and persist it in one step (last write wins)
pub fn set_and_save(store: &SharedStore, key: &str, value: &str) -> Result<()> {
    let mut guard = write(store);
    guard.set(key, value);
    guard.save()
}

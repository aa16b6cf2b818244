//! Durable key-value storage the session is persisted in

use std::{collections::HashMap, fmt::Debug, sync::Mutex};

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("failed to serialize value for storage: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string store that survives restarts (or page reloads in the browser).
///
/// Each call must be atomic from the caller's point of view, a reader never
/// sees half of a `set`.
pub trait KeyValueStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a key that does not exist is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keeps everything in memory, nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().expect("mutex poisoned").remove(key);
        Ok(())
    }
}

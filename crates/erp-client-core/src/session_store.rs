use std::sync::Arc;

use erp_shared::{const_config::session::SESSION_STORAGE_KEY, session::Session};
use tracing::{instrument, warn};

use crate::storage::{KeyValueStore, MemoryStore, StorageError};

/// Single source of truth for who is currently using this client.
///
/// Cheap to clone, all clones share the same backing storage. Anything that
/// needs the session gets a handle passed in rather than reaching for global
/// state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
    key: Arc<str>,
}

impl SessionStore {
    pub fn new<S: KeyValueStore + 'static>(backend: S) -> Self {
        Self::with_key(backend, SESSION_STORAGE_KEY)
    }

    pub fn with_key<S, K>(backend: S, key: K) -> Self
    where
        S: KeyValueStore + 'static,
        K: Into<Arc<str>>,
    {
        Self {
            backend: Arc::new(backend),
            key: key.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the persisted session if there is a readable one.
    ///
    /// Missing, corrupt or unreadable data all mean "no session" and are never
    /// reported as errors, callers fall back to the logged out state.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Option<Session> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(?err, "failed to read stored session, treating as logged out");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                // Content not logged as it may hold a token
                warn!(%err, "stored session is malformed, treating as logged out");
                None
            }
        }
    }

    /// Replaces whatever was stored before
    #[instrument(skip(self), fields(key = %self.key), err(Debug))]
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)?;
        self.backend.set(&self.key, &raw)
    }

    /// Clearing an already empty store is fine
    #[instrument(skip(self), fields(key = %self.key), err(Debug))]
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(&self.key)
    }

    /// `true` if there is a stored session that still has a token
    pub fn is_authenticated(&self) -> bool {
        self.load().is_some_and(|session| session.is_authenticated())
    }
}

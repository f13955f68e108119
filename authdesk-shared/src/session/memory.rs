use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::{SessionKey, SessionStore, StorageError};

/// In-memory [`SessionStore`].
///
/// Clones share the same entries, so a test can hand one handle to the auth
/// client and inspect the other.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<SessionKey, String>>>,
    available: bool,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::default(),
            available: true,
        }
    }

    /// A store that behaves like a host without persistent storage: reads
    /// return nothing and writes fail.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            entries: Arc::default(),
            available: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<SessionKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: SessionKey) -> Option<String> {
        if !self.available {
            return None;
        }
        self.entries().get(&key).cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries().remove(&key);
        Ok(())
    }
}

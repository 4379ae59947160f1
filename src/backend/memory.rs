//! In-memory backend.

use crate::backend::KeyValueBackend;
use crate::error::{BackendError, BackendResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory key-value backend.
///
/// The substitutable fake for tests, and a scratch store for callers that
/// do not want persistence across processes. Values live in a `Mutex`-ed
/// map for the lifetime of the backend.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with a raw value, bypassing the store.
    ///
    /// Test helper for preparing corrupt or pre-existing blobs.
    pub fn seed(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().expect("backend mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueBackend for InMemoryBackend {
    fn get(&self, key: &str) -> BackendResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| BackendError::Unavailable("poisoned lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BackendResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| BackendError::Unavailable("poisoned lock".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

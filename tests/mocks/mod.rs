use contact_agenda::error::{BackendError, BackendResult};
use contact_agenda::KeyValueBackend;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock backend for testing error paths.
///
/// Wraps an in-memory map, can be configured to fail reads or writes on
/// demand, and tracks call counts for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct FlakyBackend {
    entries: Mutex<HashMap<String, String>>,
    fail_gets: AtomicBool,
    fail_sets: AtomicBool,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FlakyBackend {
    /// Create a new backend that succeeds until told otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `get` calls fail.
    pub fn fail_gets(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `set` calls fail.
    pub fn fail_sets(&self, fail: bool) {
        self.fail_sets.store(fail, Ordering::SeqCst);
    }

    /// Number of `get` calls so far.
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Number of `set` calls so far.
    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    /// Seed a key with a raw value, bypassing failure flags.
    pub fn seed(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueBackend for FlakyBackend {
    fn get(&self, key: &str) -> BackendResult<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(BackendError::Other("injected read failure".to_string()));
        }
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BackendResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_sets.load(Ordering::SeqCst) {
            return Err(BackendError::Other("injected write failure".to_string()));
        }
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! Synchronous key-value media that hold the collections.
//!
//! A backend stores opaque string documents under string keys. Every `set`
//! overwrites the whole value for its key in one step; no backend exposes a
//! partially written document.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};

/// A whole-document key-value medium.
pub trait KvBackend {
    /// Fetch the document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Every key currently present.
    fn keys(&self) -> Result<Vec<String>>;
}

impl<B: KvBackend + ?Sized> KvBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

/// Process-local backend. Contents vanish when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Backend(format!("Lock poisoned: {e}")))
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// Backend whose reads always fail, counting attempted writes.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct UnreadableBackend {
    pub writes: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl KvBackend for UnreadableBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(StoreError::Backend(format!("cannot read {key}")))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        self.writes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Err(StoreError::Backend("cannot list keys".into()))
    }
}

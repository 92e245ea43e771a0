//! In-memory `CompletionBackend` mock

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use daybook_core::CompletionBackend;
use daybook_domain::{DaybookError, Result};

/// In-memory key-value backend for completion tests.
///
/// Reads always succeed; writes can be switched to fail to exercise the
/// store's error-containment behaviour.
#[derive(Default)]
pub struct MemoryBackend {
    ids: Mutex<HashMap<String, Vec<String>>>,
    versions: Mutex<HashMap<String, u32>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an identifier list, bypassing the trait.
    pub fn seed_ids(&self, key: &str, ids: &[&str]) {
        let ids = ids.iter().map(|s| (*s).to_string()).collect();
        self.ids.lock().unwrap().insert(key.to_string(), ids);
    }

    /// Seed a version tag, bypassing the trait.
    pub fn seed_version(&self, key: &str, version: u32) {
        self.versions.lock().unwrap().insert(key.to_string(), version);
    }

    /// What is currently stored under `key`, if anything.
    pub fn stored_ids(&self, key: &str) -> Option<Vec<String>> {
        self.ids.lock().unwrap().get(key).cloned()
    }

    pub fn stored_version(&self, key: &str) -> Option<u32> {
        self.versions.lock().unwrap().get(key).copied()
    }

    /// Toggle write failure injection.
    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    /// Number of successful `save_ids` calls.
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for MemoryBackend {
    async fn load_ids(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.ids.lock().unwrap().get(key).cloned())
    }

    async fn save_ids(&self, key: &str, ids: &[String]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DaybookError::Persistence("injected write failure".to_string()));
        }
        self.ids.lock().unwrap().insert(key.to_string(), ids.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_version(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.versions.lock().unwrap().get(key).copied())
    }

    async fn save_version(&self, key: &str, version: u32) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DaybookError::Persistence("injected write failure".to_string()));
        }
        self.versions.lock().unwrap().insert(key.to_string(), version);
        Ok(())
    }
}

/// In-memory implementation of the storage gateway
///
/// Used by tests and anywhere durable persistence is not wanted. Clones
/// share the same underlying map, mirroring how FileGateway clones share a
/// data directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{StorageError, StorageGateway};

/// Key/value store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the async interface (test helper)
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("gateway lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl StorageGateway for MemoryGateway {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("gateway lock poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("gateway lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("gateway lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

// In-memory cache - keeps serialized entries for the lifetime of the process

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::ports::{CacheError, DictionaryCache};

/// In-memory cache keyed by exact word strings.
///
/// Entries live until the process exits. Suitable for tests and for
/// deployments that do not need lookups to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl DictionaryCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, entry: &str) -> Result<(), CacheError> {
        self.entries
            .write()
            .insert(key.to_string(), entry.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

//! In-process storage provider.
//!
//! Nothing touches disk; contents live as long as the provider and its clones.

use crate::ports::outbound::StorageProvider;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        match self.data.read() {
            Ok(guard) => guard.len(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.data.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.data.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.data.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        let storage = MemoryStorageProvider::new();
        assert!(storage.is_empty());

        storage.save("k", "v1");
        storage.save("k", "v2");
        assert_eq!(storage.load("k").as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove("k");
        assert_eq!(storage.load("k"), None);
        storage.remove("k");
        assert!(storage.is_empty());
    }
}

//! Desktop platform implementations
//!
//! Provides the file-backed storage provider used by native builds.

use crate::ports::outbound::StorageProvider;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// File name used inside the platform config directory
const STORAGE_FILE_NAME: &str = "storage.json";

/// Fallback path when no platform config directory is available
const FALLBACK_STORAGE_PATH: &str = "gcms_storage.json";

/// Default storage location
///
/// - Linux: ~/.config/gcms/storage.json
/// - macOS: ~/Library/Application Support/gov.gcms.gcms/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\gcms\gcms\config\storage.json
pub fn default_storage_path() -> PathBuf {
    match ProjectDirs::from("gov", "gcms", "gcms") {
        Some(dirs) => dirs.config_dir().join(STORAGE_FILE_NAME),
        None => PathBuf::from(FALLBACK_STORAGE_PATH),
    }
}

/// Desktop storage provider with file-based persistence
///
/// Every key/value pair lives in one JSON object on disk. The map is cached in
/// memory and the whole file is rewritten after each `save`/`remove`.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Open storage at the platform default location
    pub fn new() -> Self {
        Self::at_path(default_storage_path())
    }

    /// Open storage at `storage_path`, loading existing data if the file exists.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = read_storage_file(&storage_path);

        tracing::debug!(path = ?storage_path, keys = cache.len(), "Desktop storage initialized");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::error!("Failed to create storage directory: {}", e);
                    return;
                }
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

fn read_storage_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }

    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to parse storage file: {}", e);
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save("auth-storage", r#"{"state":{},"version":0}"#);
        drop(storage);

        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(
            reopened.load("auth-storage").as_deref(),
            Some(r#"{"state":{},"version":0}"#)
        );
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save("a", "1");
        storage.save("b", "2");
        storage.remove("a");

        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(reopened.load("a"), None);
        assert_eq!(reopened.load("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").expect("write");

        let storage = DesktopStorageProvider::at_path(&path);
        assert_eq!(storage.load("auth-storage"), None);

        // The next write replaces the corrupt file
        storage.save("k", "v");
        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(reopened.load("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_clones_share_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = DesktopStorageProvider::at_path(dir.path().join("storage.json"));
        let clone = storage.clone();

        storage.save("k", "v");
        assert_eq!(clone.load("k").as_deref(), Some("v"));
    }
}

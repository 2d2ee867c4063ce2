//! Persistent key/value storage abstraction
//!
//! Implemented by browser `localStorage` on wasm32, a JSON file on desktop,
//! and an in-process map for tests. Stores never talk to it directly; they go
//! through a [`SnapshotRepository`](super::SnapshotRepository).

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Send + Sync + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// Each store owns one namespace and overwrites it in full on every write.
pub mod storage_keys {
    /// Session store namespace: `{ user, isAuthenticated }`
    pub const SESSION: &str = "auth-storage";
    /// Collection store namespace: the seven record collections
    pub const COLLECTIONS: &str = "gcms-storage";
}

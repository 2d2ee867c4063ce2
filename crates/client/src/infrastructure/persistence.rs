//! JSON snapshot repository over a [`StorageProvider`].

use std::marker::PhantomData;
use std::sync::Arc;

use gcms_shared::{
    decode, encode, CollectionsSnapshot, SessionSnapshot, COLLECTIONS_SNAPSHOT_VERSION,
    SESSION_SNAPSHOT_VERSION,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::ports::outbound::{storage_keys, PersistenceError, SnapshotRepository, StorageProvider};

/// Stores one snapshot type as a versioned JSON envelope under a fixed key.
pub struct JsonSnapshotRepository<S> {
    storage: Arc<dyn StorageProvider>,
    key: String,
    version: u32,
    _snapshot: PhantomData<fn() -> S>,
}

impl<S> JsonSnapshotRepository<S> {
    pub fn new(storage: Arc<dyn StorageProvider>, key: impl Into<String>, version: u32) -> Self {
        Self {
            storage,
            key: key.into(),
            version,
            _snapshot: PhantomData,
        }
    }
}

impl JsonSnapshotRepository<SessionSnapshot> {
    /// Repository for the session namespace (`auth-storage`)
    pub fn session(storage: Arc<dyn StorageProvider>) -> Self {
        Self::new(storage, storage_keys::SESSION, SESSION_SNAPSHOT_VERSION)
    }
}

impl JsonSnapshotRepository<CollectionsSnapshot> {
    /// Repository for the collections namespace (`gcms-storage`)
    pub fn collections(storage: Arc<dyn StorageProvider>) -> Self {
        Self::new(storage, storage_keys::COLLECTIONS, COLLECTIONS_SNAPSHOT_VERSION)
    }
}

impl<S> SnapshotRepository<S> for JsonSnapshotRepository<S>
where
    S: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<S>, PersistenceError> {
        let Some(raw) = self.storage.load(&self.key) else {
            return Ok(None);
        };

        decode(&raw, self.version)
            .map(Some)
            .map_err(|e| PersistenceError::from_envelope(&self.key, e))
    }

    fn save(&self, snapshot: &S) -> Result<(), PersistenceError> {
        let raw = encode(snapshot, self.version)
            .map_err(|e| PersistenceError::from_envelope(&self.key, e))?;
        self.storage.save(&self.key, &raw);
        Ok(())
    }

    fn clear(&self) {
        self.storage.remove(&self.key);
    }

    fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use gcms_domain::User;

    fn storage() -> (MemoryStorageProvider, Arc<dyn StorageProvider>) {
        let memory = MemoryStorageProvider::new();
        let shared: Arc<dyn StorageProvider> = Arc::new(memory.clone());
        (memory, shared)
    }

    #[test]
    fn test_load_without_saved_snapshot_is_none() {
        let (_, storage) = storage();
        let repo = JsonSnapshotRepository::session(storage);
        assert_eq!(repo.load(), Ok(None));
    }

    #[test]
    fn test_save_then_load() {
        let (memory, storage) = storage();
        let repo = JsonSnapshotRepository::session(storage);
        let snapshot = SessionSnapshot::signed_in(User::from_email("a@b.com"));

        repo.save(&snapshot).unwrap();

        assert_eq!(repo.load().unwrap(), Some(snapshot));
        let raw = memory.load(storage_keys::SESSION).unwrap();
        assert!(raw.contains(r#""isAuthenticated":true"#));
        assert!(raw.contains(r#""version":0"#));
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let (memory, storage) = storage();
        memory.save(storage_keys::COLLECTIONS, "{{{");
        let repo = JsonSnapshotRepository::collections(storage);

        assert!(matches!(
            repo.load(),
            Err(PersistenceError::Corrupt { ref key, .. }) if key == storage_keys::COLLECTIONS
        ));
    }

    #[test]
    fn test_foreign_version_is_reported() {
        let (memory, storage) = storage();
        memory.save(storage_keys::SESSION, r#"{"state":{"user":null,"isAuthenticated":false},"version":3}"#);
        let repo = JsonSnapshotRepository::session(storage);

        assert_eq!(
            repo.load(),
            Err(PersistenceError::VersionMismatch {
                key: storage_keys::SESSION.to_string(),
                found: 3,
                expected: 0,
            })
        );
    }

    #[test]
    fn test_clear_removes_key() {
        let (memory, storage) = storage();
        let repo = JsonSnapshotRepository::collections(storage);
        repo.save(&CollectionsSnapshot::initial()).unwrap();
        assert!(memory.load(storage_keys::COLLECTIONS).is_some());

        repo.clear();
        assert_eq!(memory.load(storage_keys::COLLECTIONS), None);
        assert_eq!(repo.key(), storage_keys::COLLECTIONS);
    }

    #[test]
    fn test_namespaces_are_independent() {
        let (memory, storage) = storage();
        let sessions = JsonSnapshotRepository::session(storage.clone());
        let collections = JsonSnapshotRepository::collections(storage);

        sessions.save(&SessionSnapshot::default()).unwrap();
        collections.save(&CollectionsSnapshot::initial()).unwrap();
        sessions.clear();

        assert_eq!(memory.len(), 1);
        assert!(collections.load().unwrap().is_some());
    }
}

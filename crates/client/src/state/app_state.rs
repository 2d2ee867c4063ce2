//! Application state - both stores wired to one storage backend and one change bus

use std::sync::Arc;

use crate::infrastructure::messaging::{ChangeBus, StoreEvent, SubscriptionId};
use crate::infrastructure::JsonSnapshotRepository;
use crate::ports::outbound::{IdentityPort, StorageProvider};

use super::{CollectionStore, SessionStore};

/// Owns the session and collection stores.
///
/// Construct once at startup and pass by reference; there is no global instance.
pub struct AppState {
    session: SessionStore,
    collections: CollectionStore,
    bus: ChangeBus,
}

impl AppState {
    /// Build stores over `storage` without reading it.
    pub fn new(storage: Arc<dyn StorageProvider>, identity: Arc<dyn IdentityPort>) -> Self {
        let bus = ChangeBus::new();
        let session = SessionStore::new(
            Arc::new(JsonSnapshotRepository::session(Arc::clone(&storage))),
            identity,
            bus.clone(),
        );
        let collections = CollectionStore::new(
            Arc::new(JsonSnapshotRepository::collections(storage)),
            bus.clone(),
        );

        Self {
            session,
            collections,
            bus,
        }
    }

    /// Build stores and restore both namespaces.
    pub fn load(storage: Arc<dyn StorageProvider>, identity: Arc<dyn IdentityPort>) -> Self {
        let mut state = Self::new(storage, identity);
        state.hydrate();
        state
    }

    pub fn hydrate(&mut self) {
        self.session.hydrate();
        self.collections.hydrate();
    }

    pub fn has_hydrated(&self) -> bool {
        self.session.has_hydrated() && self.collections.has_hydrated()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    pub fn collections(&self) -> &CollectionStore {
        &self.collections
    }

    pub fn collections_mut(&mut self) -> &mut CollectionStore {
        &mut self.collections
    }

    pub fn subscribe(&self, callback: impl FnMut(&StoreEvent) + Send + 'static) -> SubscriptionId {
        self.bus.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::messaging::StoreNamespace;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use crate::infrastructure::LocalIdentityProvider;
    use gcms_domain::{LoginCredentials, Opportunity};
    use std::sync::Mutex;

    fn memory_state(memory: &MemoryStorageProvider) -> AppState {
        AppState::load(Arc::new(memory.clone()), Arc::new(LocalIdentityProvider))
    }

    #[test]
    fn test_load_hydrates_both_stores() {
        let memory = MemoryStorageProvider::new();
        let unloaded = AppState::new(Arc::new(memory.clone()), Arc::new(LocalIdentityProvider));
        assert!(!unloaded.has_hydrated());

        let state = memory_state(&memory);
        assert!(state.has_hydrated());
        assert!(!state.session().is_authenticated());
        assert_eq!(state.collections().templates().len(), 4);
    }

    #[tokio::test]
    async fn test_namespaces_persist_independently() {
        let memory = MemoryStorageProvider::new();
        let mut state = memory_state(&memory);

        state
            .session_mut()
            .login(&LoginCredentials::new("a@b.com", "pw"))
            .await
            .unwrap();
        state.collections_mut().add_opportunity(Opportunity::new(
            "Help Desk",
            "VA",
            "36C10B-25-Q-0042",
        ));
        state.session_mut().logout();

        let reloaded = memory_state(&memory);
        assert!(!reloaded.session().is_authenticated());
        assert_eq!(reloaded.collections().opportunities().len(), 1);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let memory = MemoryStorageProvider::new();
        let mut state = AppState::new(Arc::new(memory), Arc::new(LocalIdentityProvider));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = state.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        state.hydrate();
        assert!(state.unsubscribe(id));
        state.session_mut().logout();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                StoreEvent::Hydrated {
                    namespace: StoreNamespace::Session
                },
                StoreEvent::Hydrated {
                    namespace: StoreNamespace::Collections
                },
            ]
        );
    }
}

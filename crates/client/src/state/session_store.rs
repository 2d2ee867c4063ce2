//! Session store - who is signed in
//!
//! Holds at most one [`User`]. The authenticated flag is derived from the
//! user's presence, so the two can never disagree in memory. Every mutation
//! rewrites the `auth-storage` namespace in full.

use std::sync::Arc;

use gcms_domain::{LoginCredentials, RegisterData, User};
use gcms_shared::SessionSnapshot;

use crate::infrastructure::messaging::{ChangeBus, StoreEvent, StoreNamespace};
use crate::ports::outbound::{IdentityError, IdentityPort, SnapshotRepository};

pub struct SessionStore {
    user: Option<User>,
    hydrated: bool,
    repository: Arc<dyn SnapshotRepository<SessionSnapshot>>,
    identity: Arc<dyn IdentityPort>,
    bus: ChangeBus,
}

impl SessionStore {
    /// Create a signed-out store. Call [`SessionStore::hydrate`] to restore a saved session.
    pub fn new(
        repository: Arc<dyn SnapshotRepository<SessionSnapshot>>,
        identity: Arc<dyn IdentityPort>,
        bus: ChangeBus,
    ) -> Self {
        Self {
            user: None,
            hydrated: false,
            repository,
            identity,
            bus,
        }
    }

    /// Replace in-memory state with the persisted session.
    ///
    /// A missing, corrupt or foreign-version snapshot leaves the store signed out.
    pub fn hydrate(&mut self) {
        self.user = match self.repository.load() {
            Ok(Some(snapshot)) => {
                if !snapshot.is_consistent() {
                    tracing::warn!(
                        is_authenticated = snapshot.is_authenticated,
                        has_user = snapshot.user.is_some(),
                        "Persisted session flag disagrees with user; trusting the user record"
                    );
                }
                snapshot.user
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted session");
                None
            }
        };
        self.hydrated = true;

        tracing::debug!(authenticated = self.is_authenticated(), "Session hydrated");
        self.bus.publish(StoreEvent::Hydrated {
            namespace: StoreNamespace::Session,
        });
    }

    pub fn has_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
        }
    }

    /// Sign in. With the local identity provider this always succeeds.
    ///
    /// On an identity error the current session is left untouched.
    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<(), IdentityError> {
        let identity = Arc::clone(&self.identity);
        let user = identity.authenticate(credentials).await?;
        tracing::info!(user_id = %user.id, "Signed in");
        self.set_user(Some(user));
        Ok(())
    }

    /// Create an account and sign in as it.
    pub async fn register(&mut self, data: &RegisterData) -> Result<(), IdentityError> {
        let identity = Arc::clone(&self.identity);
        let user = identity.register(data).await?;
        tracing::info!(user_id = %user.id, "Registered");
        self.set_user(Some(user));
        Ok(())
    }

    /// Sign out, whatever the current state.
    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        self.set_user(None);
    }

    fn set_user(&mut self, user: Option<User>) {
        self.user = user;

        if let Err(e) = self.repository.save(&self.snapshot()) {
            tracing::error!(error = %e, key = self.repository.key(), "Failed to persist session");
        }

        self.bus.publish(StoreEvent::SessionChanged {
            authenticated: self.is_authenticated(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use crate::infrastructure::{JsonSnapshotRepository, LocalIdentityProvider};
    use crate::ports::outbound::{storage_keys, MockIdentityPort, StorageProvider};
    use std::sync::Mutex;

    fn store_over(memory: &MemoryStorageProvider) -> SessionStore {
        let storage: Arc<dyn StorageProvider> = Arc::new(memory.clone());
        SessionStore::new(
            Arc::new(JsonSnapshotRepository::session(storage)),
            Arc::new(LocalIdentityProvider),
            ChangeBus::new(),
        )
    }

    fn registration() -> RegisterData {
        RegisterData {
            email: "pm@acme.com".to_string(),
            name: "Pat Morgan".to_string(),
            company: "Acme Federal".to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_derives_user_from_email() {
        let mut store = store_over(&MemoryStorageProvider::new());

        store
            .login(&LoginCredentials::new("a@b.com", "pw"))
            .await
            .unwrap();

        assert!(store.is_authenticated());
        let user = store.user().unwrap();
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.company, "My Company");
    }

    #[tokio::test]
    async fn test_register_uses_supplied_fields() {
        let mut store = store_over(&MemoryStorageProvider::new());

        store.register(&registration()).await.unwrap();

        let snapshot = store.snapshot();
        assert!(snapshot.is_authenticated);
        let user = snapshot.user.unwrap();
        assert_eq!(user.name, "Pat Morgan");
        assert_eq!(user.company, "Acme Federal");
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        let mut store = store_over(&MemoryStorageProvider::new());

        store.logout();
        assert_eq!(store.snapshot(), SessionSnapshot::default());

        store.register(&registration()).await.unwrap();
        store.logout();
        assert_eq!(store.snapshot(), SessionSnapshot::default());
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let memory = MemoryStorageProvider::new();
        let mut first = store_over(&memory);
        first
            .login(&LoginCredentials::new("a@b.com", "pw"))
            .await
            .unwrap();

        let mut second = store_over(&memory);
        assert!(!second.has_hydrated());
        second.hydrate();

        assert!(second.has_hydrated());
        assert_eq!(second.snapshot(), first.snapshot());
    }

    #[test]
    fn test_hydrate_with_garbage_signs_out() {
        let memory = MemoryStorageProvider::new();
        memory.save(storage_keys::SESSION, "definitely not json");

        let mut store = store_over(&memory);
        store.hydrate();

        assert!(store.has_hydrated());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_hydrate_normalizes_inconsistent_flag() {
        let memory = MemoryStorageProvider::new();
        memory.save(
            storage_keys::SESSION,
            r#"{"state":{"user":null,"isAuthenticated":true},"version":0}"#,
        );

        let mut store = store_over(&memory);
        store.hydrate();

        assert!(!store.is_authenticated());
        assert!(store.snapshot().is_consistent());
    }

    #[tokio::test]
    async fn test_password_is_not_persisted() {
        let memory = MemoryStorageProvider::new();
        let mut store = store_over(&memory);

        store
            .login(&LoginCredentials::new("a@b.com", "correct horse"))
            .await
            .unwrap();

        let raw = memory.load(storage_keys::SESSION).unwrap();
        assert!(!raw.contains("correct horse"));
    }

    #[tokio::test]
    async fn test_identity_error_leaves_session_untouched() {
        let memory = MemoryStorageProvider::new();
        let storage: Arc<dyn StorageProvider> = Arc::new(memory.clone());

        let mut identity = MockIdentityPort::new();
        identity
            .expect_authenticate()
            .times(1)
            .returning(|_| Err(IdentityError::Unavailable("offline".to_string())));

        let mut store = SessionStore::new(
            Arc::new(JsonSnapshotRepository::session(storage)),
            Arc::new(identity),
            ChangeBus::new(),
        );

        let result = store.login(&LoginCredentials::new("a@b.com", "pw")).await;

        assert_eq!(
            result,
            Err(IdentityError::Unavailable("offline".to_string()))
        );
        assert!(!store.is_authenticated());
        assert_eq!(memory.load(storage_keys::SESSION), None);
    }

    #[tokio::test]
    async fn test_mutations_publish_events() {
        let bus = ChangeBus::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        bus.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        let storage: Arc<dyn StorageProvider> = Arc::new(MemoryStorageProvider::new());
        let mut store = SessionStore::new(
            Arc::new(JsonSnapshotRepository::session(storage)),
            Arc::new(LocalIdentityProvider),
            bus,
        );

        store.hydrate();
        store
            .login(&LoginCredentials::new("a@b.com", "pw"))
            .await
            .unwrap();
        store.logout();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                StoreEvent::Hydrated {
                    namespace: StoreNamespace::Session
                },
                StoreEvent::SessionChanged {
                    authenticated: true
                },
                StoreEvent::SessionChanged {
                    authenticated: false
                },
            ]
        );
    }
}

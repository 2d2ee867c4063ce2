//! Outbound ports: what the stores need from the outside world.

pub mod identity;
pub mod snapshot_repository;
pub mod storage;

pub use identity::{IdentityError, IdentityPort};
pub use snapshot_repository::{PersistenceError, SnapshotRepository};
pub use storage::{storage_keys, StorageProvider};

#[cfg(test)]
pub use identity::MockIdentityPort;

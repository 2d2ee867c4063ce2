//! Infrastructure adapters for the client ports

pub mod identity;
pub mod messaging;
pub mod persistence;
pub mod platform;

pub use identity::LocalIdentityProvider;
pub use messaging::{ChangeBus, ChangeKind, StoreEvent, StoreNamespace, SubscriptionId};
pub use persistence::JsonSnapshotRepository;

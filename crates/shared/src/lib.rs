//! GCMS Shared - the persisted layout of the client stores
//!
//! This crate contains the types written to and read from local storage:
//! - The versioned envelope every namespace is wrapped in
//! - The session snapshot (`auth-storage`)
//! - The collections snapshot (`gcms-storage`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod envelope;
pub mod snapshots;

pub use envelope::{decode, encode, EnvelopeError, PersistedEnvelope};
pub use snapshots::{
    CollectionsSnapshot, SessionSnapshot, COLLECTIONS_SNAPSHOT_VERSION, SESSION_SNAPSHOT_VERSION,
};

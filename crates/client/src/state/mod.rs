//! Application state management
//!
//! Stores own in-memory state, persist it through snapshot repositories and
//! announce changes on the [`ChangeBus`](crate::infrastructure::ChangeBus).

pub mod app_state;
pub mod collection;
pub mod collection_store;
pub mod session_store;

pub use app_state::AppState;
pub use collection::Collection;
pub use collection_store::CollectionStore;
pub use session_store::SessionStore;

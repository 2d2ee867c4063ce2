//! GCMS Client - persisted session and collection stores
//!
//! ## Structure
//!
//! - `ports/` - Storage, snapshot repository and identity traits
//! - `infrastructure/` - Platform storage, JSON snapshots, local identity, change bus
//! - `state/` - Session store, collection store and [`AppState`]
//! - `ui/` - Navigation model
//! - `cli` - Front end for the `gcms-client` binary

pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use config::ClientConfig;
pub use infrastructure::platform::create_storage;
pub use state::{AppState, CollectionStore, SessionStore};

//! Platform-specific storage implementations
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{default_storage_path, DesktopStorageProvider};

pub use memory::MemoryStorageProvider;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::ports::outbound::StorageProvider;

/// Create the storage provider for this platform
#[cfg(not(target_arch = "wasm32"))]
pub fn create_storage(config: &ClientConfig) -> Arc<dyn StorageProvider> {
    match &config.storage_path {
        Some(path) => Arc::new(DesktopStorageProvider::at_path(path)),
        None => Arc::new(DesktopStorageProvider::new()),
    }
}

/// Create the storage provider for this platform
#[cfg(target_arch = "wasm32")]
pub fn create_storage(_config: &ClientConfig) -> Arc<dyn StorageProvider> {
    Arc::new(WasmStorageProvider::new())
}

//! WASM platform implementations
//!
//! Storage is the browser's `window.localStorage`.

use crate::ports::outbound::StorageProvider;

/// Browser storage provider backed by `localStorage`
///
/// The handle is looked up on every call so the provider holds no JS values
/// and stays `Send + Sync`.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read localStorage key {}: {:?}", key, e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

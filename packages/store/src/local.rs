//! # `localStorage` store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It looks up `window.localStorage` on every call instead of caching the
//! handle, so the struct stays zero-size and `Clone`.
//!
//! Reads degrade to `None` when storage is blocked (private browsing, disabled
//! cookies); writes surface the failure as a [`StoreError`] so the session
//! store can avoid persisting half a session.

use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {key} from local storage: {e:?}");
            }
        }
    }
}

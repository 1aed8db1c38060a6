use crate::error::StoreError;

/// Synchronous string key/value storage, shaped after `window.localStorage`.
///
/// Reads never fail: a missing key and an unreadable backend both yield
/// `None`. Writes report failure so callers can keep related keys consistent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

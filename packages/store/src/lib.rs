//! Durable client-side storage for the attendance client.
//!
//! Everything the browser keeps between page loads goes through the
//! [`KeyValueStore`] trait: the persisted [`Session`] (bearer token plus the
//! serialized user record) and the [`ClientConfig`] override for the backend
//! base URL. The web build uses `window.localStorage`; tests and native builds
//! use [`MemoryStore`].

pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ClientConfig;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use models::{Role, Session, UserInfo};
pub use session::SessionStore;

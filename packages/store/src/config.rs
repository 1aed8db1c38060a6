//! # Client configuration
//!
//! The only tunable is the backend base URL. It defaults to the local
//! development server and can be overridden per browser by writing
//! `attendance.apiBase` into local storage.
//!
//! ```text
//! localStorage.setItem("attendance.apiBase", "https://attendance.example.org/api")
//! ```

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const API_BASE_KEY: &str = "attendance.apiBase";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl ClientConfig {
    /// Load the config, applying the local-storage override when present.
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(API_BASE_KEY) {
            Some(base) if !base.trim().is_empty() => Self::default().with_api_base(&base),
            _ => Self::default(),
        }
    }

    /// Builder method to set the base URL. Trailing slashes are dropped so
    /// request paths can always start with `/`.
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }
}

use thiserror::Error;

/// Failures of the durable key/value backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

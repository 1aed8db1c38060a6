use thiserror::Error;

/// Message used when a failed response carries nothing readable.
pub const FALLBACK_MESSAGE: &str = "Unexpected error";

/// Everything that can go wrong between an action and the backend.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request body could not be serialised.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Human-readable message for display in a flash banner.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the request but gave no explanation.
    pub fn is_unexplained(&self) -> bool {
        matches!(self, ApiError::Http { message, .. } if message == FALLBACK_MESSAGE)
    }
}

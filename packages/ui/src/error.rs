use api::ApiError;
use thiserror::Error;

/// Failure of a user-triggered action. Always surfaced as an alert flash.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A form field failed local validation before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

impl ActionError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

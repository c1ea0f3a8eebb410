//! Domain error types

use serde::Serialize;
use thiserror::Error;

/// Message shown when a failed fetch carries no usable server message.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch summary data";

/// A failed fetch cycle, as the user sees it.
///
/// Network failures, non-2xx statuses and malformed bodies all collapse into
/// this one kind. Only the message differs: the backend's own `message`
/// field when it sent one, otherwise [`DEFAULT_FETCH_ERROR`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Build from an optional message embedded in the failure payload.
    pub fn from_server_message(message: Option<&str>) -> Self {
        let message = crate::util::non_empty(message).unwrap_or(DEFAULT_FETCH_ERROR);
        Self {
            message: message.to_string(),
        }
    }

    /// A failure with no server message.
    pub fn generic() -> Self {
        Self::from_server_message(None)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

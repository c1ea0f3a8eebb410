//! Summary Gateway port
//!
//! Defines the interface for reading session summaries from the backend.

use async_trait::async_trait;
use summary_domain::{ClarifierAnswer, Conflict, FetchError};
use thiserror::Error;

/// Errors that can occur during summary gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Backend returned HTTP {status}")]
    Status {
        status: u16,
        /// `message` field of the error body, when the backend sent one.
        message: Option<String>,
    },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl GatewayError {
    /// Message embedded in the failure payload, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Collapse into the single user-facing failure.
    pub fn to_fetch_error(&self) -> FetchError {
        FetchError::from_server_message(self.server_message())
    }
}

/// Gateway for the backend's summary endpoints
///
/// This port defines how the application layer reads the two summary
/// resources. Implementations (adapters) live in the infrastructure layer.
/// A missing list in an otherwise successful response is an empty list,
/// not an error.
#[async_trait]
pub trait SummaryGateway: Send + Sync {
    /// Clarifier question/answer pairs recorded for the session
    async fn clarifier_answers(&self, session_id: &str)
    -> Result<Vec<ClarifierAnswer>, GatewayError>;

    /// Conflicts detected (and possibly resolved) for the session
    async fn conflicts(&self, session_id: &str) -> Result<Vec<Conflict>, GatewayError>;
}

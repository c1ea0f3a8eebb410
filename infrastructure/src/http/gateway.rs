//! HTTP adapter for the summary backend.
//!
//! Thin `reqwest` wrapper over the two read-only endpoints. Every request
//! carries the session id in the `x-session-id` header.

use super::wire::{
    CLARIFIER_SUMMARY_PATH, CONFLICT_RESOLVER_PATH, SESSION_HEADER, extract_error_message,
    parse_clarifier_summary, parse_conflict_summary,
};
use crate::config::FileBackendConfig;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;
use summary_application::{GatewayError, SummaryGateway};
use summary_domain::util::truncate_str;
use summary_domain::{ClarifierAnswer, Conflict};
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("session-summary/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body written to the log
const MAX_LOGGED_BODY: usize = 200;

/// [`SummaryGateway`] backed by the agents HTTP API.
#[derive(Clone)]
pub struct HttpSummaryGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSummaryGateway {
    pub fn new(config: &FileBackendConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::RequestFailed(format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` for the session and return the body of a 2xx response.
    async fn get_body(&self, path: &str, session_id: &str) -> Result<String, GatewayError> {
        let url = self.endpoint(path);
        debug!("GET {} (session {})", url, session_id);

        let response = self
            .http
            .get(&url)
            .header(SESSION_HEADER, session_id)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(from_reqwest)?;

        if !status.is_success() {
            warn!(
                "GET {} returned {}: {}",
                url,
                status,
                truncate_str(&body, MAX_LOGGED_BODY)
            );
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        debug!("GET {} returned {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}

fn from_reqwest(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl SummaryGateway for HttpSummaryGateway {
    async fn clarifier_answers(
        &self,
        session_id: &str,
    ) -> Result<Vec<ClarifierAnswer>, GatewayError> {
        let body = self.get_body(CLARIFIER_SUMMARY_PATH, session_id).await?;
        parse_clarifier_summary(&body)
    }

    async fn conflicts(&self, session_id: &str) -> Result<Vec<Conflict>, GatewayError> {
        let body = self.get_body(CONFLICT_RESOLVER_PATH, session_id).await?;
        parse_conflict_summary(&body)
    }
}

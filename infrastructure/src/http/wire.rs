//! Backend wire format.
//!
//! Pure parsing, kept apart from the client so it can be tested without a
//! server.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use summary_application::GatewayError;
use summary_domain::{ClarifierAnswer, Conflict};
use tracing::debug;

pub const CLARIFIER_SUMMARY_PATH: &str = "/api/agents/clarifier/summary";
pub const CONFLICT_RESOLVER_PATH: &str = "/api/agents/conflict-resolver";

/// Header carrying the session id on every request
pub const SESSION_HEADER: &str = "x-session-id";

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct ClarifierSummaryBody {
    #[serde(default)]
    answers: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct ConflictSummaryBody {
    #[serde(default)]
    conflicts: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse a clarifier summary. A missing or `null` `answers` field is empty.
pub fn parse_clarifier_summary(body: &str) -> Result<Vec<ClarifierAnswer>, GatewayError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: ClarifierSummaryBody =
        serde_json::from_str(body).map_err(|e| GatewayError::InvalidBody(e.to_string()))?;
    Ok(decode_items("answers", parsed.answers))
}

/// Parse a conflict summary. A missing or `null` `conflicts` field is empty.
pub fn parse_conflict_summary(body: &str) -> Result<Vec<Conflict>, GatewayError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: ConflictSummaryBody =
        serde_json::from_str(body).map_err(|e| GatewayError::InvalidBody(e.to_string()))?;
    Ok(decode_items("conflicts", parsed.conflicts))
}

/// Decode list elements one by one, dropping those that are not objects.
///
/// Field shapes inside an object are already lenient, so only a non-object
/// element (a stray string, number, array or `null`) is skipped.
fn decode_items<T: DeserializeOwned>(field: &str, items: Option<Vec<Value>>) -> Vec<T> {
    items
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if !item.is_object() {
                debug!("Skipping non-object {}[{}]: {}", field, idx, item);
                return None;
            }
            serde_json::from_value(item)
                .map_err(|e| debug!("Skipping undecodable {}[{}]: {}", field, idx, e))
                .ok()
        })
        .collect()
}

/// The `message` string of an error body, if the body is JSON and has one.
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.message? {
        Value::String(message) if !message.is_empty() => Some(message),
        _ => None,
    }
}

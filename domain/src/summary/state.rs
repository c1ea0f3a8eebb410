//! Summary view state
//!
//! One tagged value replaces the loading flag, the error string and the
//! two lists, so combinations like "loading with an error" cannot exist.
//!
//! ```text
//! Idle ──(key present)──▶ Loading ──▶ Loaded(summary)
//!                            │
//!                            └──────▶ Failed(error)
//! ```

use crate::core::error::FetchError;
use crate::summary::clarifier::ClarifierAnswer;
use crate::summary::conflict::Conflict;
use serde::Serialize;

/// Both fetched resources of one completed cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub clarifiers: Vec<ClarifierAnswer>,
    pub conflicts: Vec<Conflict>,
}

impl SessionSummary {
    pub fn new(clarifiers: Vec<ClarifierAnswer>, conflicts: Vec<Conflict>) -> Self {
        Self {
            clarifiers,
            conflicts,
        }
    }
}

/// State of the summary view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryState {
    /// No fetch key yet; nothing requested.
    #[default]
    Idle,
    /// A fetch cycle is in flight.
    Loading,
    /// The cycle completed with both resources.
    Loaded(SessionSummary),
    /// The cycle failed; nothing was kept.
    Failed(FetchError),
}

impl SummaryState {
    /// Whether the view should show the loading indicator.
    ///
    /// `Idle` counts: without identifiers the view never leaves its initial
    /// loading appearance.
    pub fn is_pending(&self) -> bool {
        matches!(self, SummaryState::Idle | SummaryState::Loading)
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        match self {
            SummaryState::Loaded(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            SummaryState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryState::Idle => "idle",
            SummaryState::Loading => "loading",
            SummaryState::Loaded(_) => "loaded",
            SummaryState::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for SummaryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two backend resources a cycle fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryResource {
    Clarifiers,
    Conflicts,
}

impl SummaryResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryResource::Clarifiers => "clarifiers",
            SummaryResource::Conflicts => "conflicts",
        }
    }
}

impl std::fmt::Display for SummaryResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

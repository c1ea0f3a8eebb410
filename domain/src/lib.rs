//! Domain layer for session-summary
//!
//! This crate contains the entities and value objects of the summary view.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`SessionContext`] arrives from upstream. Only when both the session id
//! and the user id are present does it yield a [`SessionKey`], and only a key
//! starts a fetch cycle.
//!
//! ## Summary
//!
//! A cycle fetches the clarifier answers and the conflicts recorded for the
//! session. The view's progress is a single [`SummaryState`]:
//! `Idle | Loading | Loaded | Failed`.

pub mod config;
pub mod core;
pub mod session;
pub mod summary;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigOverrides, FetchStrategy, OutputFormat};
pub use core::error::{DEFAULT_FETCH_ERROR, FetchError};
pub use session::entities::{SessionContext, SessionKey};
pub use summary::{
    clarifier::{ClarifierAnswer, NO_ANSWER},
    conflict::Conflict,
    state::{SessionSummary, SummaryResource, SummaryState},
};

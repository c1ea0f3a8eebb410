//! Application layer for session-summary
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    summary_gateway::{GatewayError, SummaryGateway},
    summary_observer::{NoObserver, SummaryObserver},
};
pub use use_cases::load_summary::{LoadSummaryError, LoadSummaryUseCase};
pub use use_cases::summary_controller::SummaryController;

//! Summary observer port
//!
//! Defines the interface for following a summary view while it loads.

use summary_domain::{SummaryResource, SummaryState};

/// Callback for view state changes and request progress
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.).
/// Callbacks may run while the controller holds its state lock, so they
/// must not call back into the controller.
pub trait SummaryObserver: Send + Sync {
    /// Called whenever the view state changes
    fn on_state_change(&self, state: &SummaryState);

    /// Called when a request for one resource is issued
    fn on_fetch_start(&self, _resource: SummaryResource) {}

    /// Called when a request for one resource completes
    fn on_fetch_complete(&self, _resource: SummaryResource, _success: bool) {}

    /// Called when a superseded cycle finishes and its result is dropped
    fn on_cycle_discarded(&self, _cycle: u64) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl SummaryObserver for NoObserver {
    fn on_state_change(&self, _state: &SummaryState) {}
}

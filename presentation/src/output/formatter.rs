//! Output formatter trait

use serde::Serialize;
use summary_domain::{OutputFormat, SessionContext, SummaryState};

/// Everything a summary view shows: the session header and the view state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SummaryPage<'a> {
    pub session: &'a SessionContext,
    pub summary: &'a SummaryState,
}

impl<'a> SummaryPage<'a> {
    pub fn new(session: &'a SessionContext, summary: &'a SummaryState) -> Self {
        Self { session, summary }
    }
}

/// Trait for formatting summary views
pub trait OutputFormatter {
    /// Format for a human reader
    fn format(&self, page: &SummaryPage<'_>) -> String;

    /// Format as JSON
    fn format_json(&self, page: &SummaryPage<'_>) -> String;

    /// Format in the requested output format
    fn render(&self, page: &SummaryPage<'_>, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format(page),
            OutputFormat::Json => self.format_json(page),
        }
    }
}

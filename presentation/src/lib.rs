//! Presentation layer for session-summary
//!
//! This crate contains the CLI definition, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, SummaryPage};
pub use progress::reporter::{LoadingSpinner, SimpleProgress};

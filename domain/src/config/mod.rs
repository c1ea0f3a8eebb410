//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod fetch_strategy;
mod output_format;
mod overrides;

pub use fetch_strategy::FetchStrategy;
pub use output_format::OutputFormat;
pub use overrides::ConfigOverrides;

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod fetch;
mod output;

pub use backend::FileBackendConfig;
pub use fetch::FileFetchConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use summary_domain::ConfigOverrides;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.base_url is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("backend.{0} cannot be 0")]
    InvalidTimeout(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// Fetch cycle settings
    pub fetch: FileFetchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        self.backend.validate()
    }

    /// Apply command-line overrides, which win over every loaded source.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.backend.base_url = base_url.clone();
        }
        if let Some(strategy) = overrides.strategy {
            self.fetch.strategy = strategy;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.no_color {
            self.output.color = false;
        }
    }
}

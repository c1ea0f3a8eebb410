//! Configuration file loading for session-summary
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SESSION_SUMMARY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./summary.toml` or `./.summary.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/session-summary/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileFetchConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;

//! Backend configuration from TOML (`[backend]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// Default backend the summaries are read from
pub const DEFAULT_BASE_URL: &str = "https://astra-c8r4.onrender.com";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Scheme and host of the backend, without a trailing path
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl FileBackendConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        } else {
            match reqwest::Url::parse(base_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string())),
            }
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigValidationError::InvalidTimeout("timeout_secs"));
        }
        if self.connect_timeout_secs == 0 {
            issues.push(ConfigValidationError::InvalidTimeout("connect_timeout_secs"));
        }

        issues
    }
}

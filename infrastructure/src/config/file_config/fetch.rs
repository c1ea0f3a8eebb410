//! Fetch configuration from TOML (`[fetch]` section)

use serde::{Deserialize, Serialize};
use summary_domain::FetchStrategy;

/// Raw fetch configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// `sequential` (default) or `concurrent`
    pub strategy: FetchStrategy,
}

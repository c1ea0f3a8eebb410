//! Command-line configuration overrides

use super::{FetchStrategy, OutputFormat};

/// Settings given on the command line.
///
/// Applied on top of every configuration source. `None` (or `false` for
/// `no_color`) leaves the configured value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub strategy: Option<FetchStrategy>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl ConfigOverrides {
    /// True when no setting is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

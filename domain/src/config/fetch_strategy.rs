//! Fetch strategy value object

use serde::{Deserialize, Serialize};

/// How a cycle issues its two requests.
///
/// | Strategy | Order | On failure |
/// |----------|-------|------------|
/// | `Sequential` | conflicts only after clarifiers succeeded | the second request is never sent |
/// | `Concurrent` | both at once | first failure wins, the other request is dropped |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    #[default]
    Sequential,
    Concurrent,
}

impl FetchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStrategy::Sequential => "sequential",
            FetchStrategy::Concurrent => "concurrent",
        }
    }
}

impl std::fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(FetchStrategy::default(), FetchStrategy::Sequential);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let strategy: FetchStrategy = serde_json::from_str("\"concurrent\"").unwrap();
        assert_eq!(strategy, FetchStrategy::Concurrent);
        assert!(serde_json::from_str::<FetchStrategy>("\"parallel\"").is_err());
    }
}

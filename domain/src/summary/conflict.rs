//! Conflicts reported by the conflict resolver

use super::lenient::{deserialize_optional_text, deserialize_optional_text_list};
use crate::util::{first_present, non_empty};
use serde::{Deserialize, Serialize};

/// A detected conflict and, when settled, the option it resolved to.
///
/// The resolver has used two vocabularies over time (`issue`/`options` and
/// `question`/`choices`); accessors hide the difference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub question: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub choices: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub resolved_option: Option<String>,
}

impl Conflict {
    pub fn new(issue: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            issue: Some(issue.into()),
            options: Some(options),
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, option: impl Into<String>) -> Self {
        self.resolved_option = Some(option.into());
        self
    }

    /// `issue`, else `question`, else empty.
    pub fn label(&self) -> &str {
        first_present(&[self.issue.as_deref(), self.question.as_deref()]).unwrap_or_default()
    }

    /// `options`, else `choices`, else nothing.
    ///
    /// A present `options` list wins even when empty.
    pub fn option_list(&self) -> &[String] {
        self.options
            .as_deref()
            .or(self.choices.as_deref())
            .unwrap_or_default()
    }

    /// The chosen option, only when one was recorded.
    pub fn resolution(&self) -> Option<&str> {
        non_empty(self.resolved_option.as_deref())
    }
}

//! Clarifier question/answer pairs

use super::lenient::deserialize_optional_text;
use crate::util::{first_present, non_empty};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing answer.
pub const NO_ANSWER: &str = "No answer provided";

/// One recorded clarifier exchange, in the order the backend returned it.
///
/// Older clarifier records store the prompt under `text` instead of
/// `question`; both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarifierAnswer {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub question: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub answer: Option<String>,
}

impl ClarifierAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            text: None,
            answer: Some(answer.into()),
        }
    }

    /// `question`, else `text`, else empty.
    pub fn prompt(&self) -> &str {
        first_present(&[self.question.as_deref(), self.text.as_deref()]).unwrap_or_default()
    }

    /// The answer, or [`NO_ANSWER`].
    pub fn answer_or_default(&self) -> &str {
        non_empty(self.answer.as_deref()).unwrap_or(NO_ANSWER)
    }
}

//! Session domain entities

use crate::util::non_empty;
use serde::{Deserialize, Serialize};

/// Identifiers a summary is fetched for (Value Object)
///
/// Only exists when both ids are present, so holding one means a fetch
/// cycle may run. Equality drives refetching: a cycle starts whenever the
/// pair changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionKey {
    pub session_id: String,
    pub user_id: String,
}

/// Session context handed in by the caller (Entity)
///
/// Not owned or validated here. Every field is displayed verbatim;
/// absent fields render empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub user_idea: Option<String>,
}

impl SessionContext {
    pub fn new(
        session_id: Option<String>,
        user_id: Option<String>,
        user_idea: Option<String>,
    ) -> Self {
        Self {
            session_id,
            user_id,
            user_idea,
        }
    }

    /// The fetch key, or `None` when either identifier is absent or empty.
    pub fn fetch_key(&self) -> Option<SessionKey> {
        let session_id = non_empty(self.session_id.as_deref())?;
        let user_id = non_empty(self.user_id.as_deref())?;
        Some(SessionKey {
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
        })
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or_default()
    }

    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or_default()
    }

    pub fn user_idea(&self) -> &str {
        self.user_idea.as_deref().unwrap_or_default()
    }
}

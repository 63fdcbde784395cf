//! User profile domain model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::tags::tokenize;

/// Session details the API attaches to the profile for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Timestamp of the current login (ISO 8601 format).
    #[serde(default)]
    pub login_time: Option<String>,
    /// Whether the session outlives the browser/application restart.
    #[serde(default)]
    pub session_permanent: bool,
}

/// Profile record as returned by the platform API.
///
/// `tendency` is the opaque legacy preference signal; it is only ever
/// interpreted through [`tendency_tokens`](Self::tendency_tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    /// Raw tendency signal (JSON-object or delimited string form).
    #[serde(default)]
    pub tendency: Option<String>,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
    /// Account creation timestamp (ISO 8601 format).
    pub created_at: String,
    /// Current session details, when the API includes them.
    #[serde(default)]
    pub session_info: Option<SessionInfo>,
}

impl UserProfile {
    /// Normalized tokens from the stored tendency signal; empty when the
    /// profile carries none.
    pub fn tendency_tokens(&self) -> BTreeSet<String> {
        tokenize(self.tendency.as_deref())
    }
}

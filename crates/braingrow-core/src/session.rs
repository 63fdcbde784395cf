//! Session context for authenticated API access.
//!
//! Owns the auth token with a single explicit lifecycle: created empty at
//! app start, filled on login/signup, cleared on logout. Components that
//! need auth state receive this context instead of reading ambient storage.

use serde::{Deserialize, Serialize};

/// Explicit session state passed to components that need authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Bearer token issued by the login/signup endpoints, if any.
    token: Option<String>,
}

impl SessionContext {
    /// Creates a new unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token issued at login/signup.
    pub fn authenticate(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clears the session on logout.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Returns true when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the raw token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the `Authorization` header value for the current token.
    pub fn bearer_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

//! Error types for the BrainGrow client engine.

use thiserror::Error;

/// A shared error type for the entire client engine.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The pure core operations
/// (tendency tokenizing, selection edits, chat rendering) never produce
/// errors; these variants exist for the I/O seams around them.
#[derive(Error, Debug, Clone)]
pub enum BraingrowError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// HTTP transport or status error from the platform API
    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Authentication/session error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (transport-level failures before an HTTP status exists)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BraingrowError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Http error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an authentication error, including HTTP 401/403.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::Auth(_) => true,
            Self::Http { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl From<std::io::Error> for BraingrowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BraingrowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BraingrowError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for BraingrowError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Io {
                message: err.to_string(),
            },
        }
    }
}

/// A type alias for `Result<T, BraingrowError>`.
pub type Result<T> = std::result::Result<T, BraingrowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_auth_covers_http_statuses() {
        assert!(BraingrowError::auth("missing token").is_auth());
        assert!(BraingrowError::http(401, "unauthorized").is_auth());
        assert!(BraingrowError::http(403, "forbidden").is_auth());
        assert!(!BraingrowError::http(500, "boom").is_auth());
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let converted: BraingrowError = err.into();
        assert!(matches!(
            converted,
            BraingrowError::Serialization { ref format, .. } if format == "JSON"
        ));
    }
}

//! Error types for tms-core
//!
//! Provides a unified error type shared by the HTTP adapter and the CLI.
//! Every variant maps to a CLI exit code.

use thiserror::Error;

/// Result type alias for tms operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tms operations
#[derive(Error, Debug)]
pub enum Error {
    /// The server refused the request because the caller lacks permission (401/403)
    #[error("Authorization failed ({status}): {message}")]
    Authorization { status: u16, message: String },

    /// Any other non-success response from the server
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A required argument was missing or empty
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(String),

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server profile not found
    #[error("Server not found: {0}")]
    ServerNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// HTTP status code carried by server-side errors
    pub const fn status(&self) -> Option<u16> {
        match self {
            Error::Authorization { status, .. } | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is the server refusing access
    pub const fn is_authorization(&self) -> bool {
        matches!(self, Error::Authorization { .. })
    }

    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::Config(_) | Error::InvalidUrl(_) => 2, // UsageError
            Error::Network(_) => 3,                                                   // NetworkError
            Error::Authorization { .. } => 4,                                         // AuthError
            Error::ServerNotFound(_) | Error::Api { status: 404, .. } => 5,           // NotFound
            Error::Api { status: 409, .. } => 6,                                      // Conflict
            _ => 1,                                                                   // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::InvalidArgument("projectId".into()).exit_code(), 2);
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::Network("test".into()).exit_code(), 3);
        let auth = Error::Authorization {
            status: 403,
            message: "forbidden".into(),
        };
        assert_eq!(auth.exit_code(), 4);
        assert_eq!(Error::ServerNotFound("test".into()).exit_code(), 5);
        let missing = Error::Api {
            status: 404,
            message: String::new(),
        };
        assert_eq!(missing.exit_code(), 5);
        let conflict = Error::Api {
            status: 409,
            message: "checked out".into(),
        };
        assert_eq!(conflict.exit_code(), 6);
        let server = Error::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(server.exit_code(), 1);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("projectId".into());
        assert_eq!(err.to_string(), "Invalid argument: projectId must not be empty");

        let err = Error::Authorization {
            status: 401,
            message: "token expired".into(),
        };
        assert_eq!(err.to_string(), "Authorization failed (401): token expired");

        let err = Error::ServerNotFound("prod".into());
        assert_eq!(err.to_string(), "Server not found: prod");
    }

    #[test]
    fn test_error_status() {
        let err = Error::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_authorization());
        assert_eq!(Error::Network("reset".into()).status(), None);
    }
}

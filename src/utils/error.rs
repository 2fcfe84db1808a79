//! Error handling for the console core
//!
//! This module defines all error types used throughout the crate. Every
//! failure is surfaced to the operator at the UI boundary; nothing in this
//! subsystem swallows errors or retries on its own.

use thiserror::Error;

/// Result type alias for the console core
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for the console core
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Backend rejected the request; the server-reported reason is kept
    /// verbatim so the operator sees what the backend saw
    #[error("API error ({status}): {reason}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Server-reported reason
        reason: String,
    },

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Validation errors (naming conflicts, reserved names, bad input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Permission editor used outside its valid state
    #[error("Editor state error: {0}")]
    EditorState(String),
}

impl ConsoleError {
    /// Create an authorization error
    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an API error from a status code and server reason
    pub fn api(status: u16, reason: impl Into<String>) -> Self {
        Self::Api {
            status,
            reason: reason.into(),
        }
    }

    /// Create an editor-state error
    pub fn editor_state(msg: impl Into<String>) -> Self {
        Self::EditorState(msg.into())
    }
}

impl From<config::ConfigError> for ConsoleError {
    fn from(error: config::ConfigError) -> Self {
        ConsoleError::Config(error.to_string())
    }
}

//! Error handling for the FinanceClinics client

use std::fmt;
use thiserror::Error;

/// Unified error type for the FinanceClinics client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Non-success responses from the API
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Error message, narrowed from the response body when possible
        message: String,
    },

    /// Client-side authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl Error {
    /// Create a new API error from a status code and message
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Whether this error is an authorization failure (HTTP 401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }
}

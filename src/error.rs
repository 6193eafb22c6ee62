//! Error types for the Discogs API client.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Discogs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Discogs API operations.
///
/// Transport failures, malformed bodies, and provider-side error
/// responses are all surfaced as distinct variants so that callers can
/// tell "not found" apart from "network down".
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// API returned an error response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message from the API
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request was rejected for missing or invalid credentials (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited by the API (429)
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error indicates a client-side issue
    /// (bad identifier, missing credentials, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::NotFound(_) | Error::Unauthorized(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the request was throttled by the provider.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// Create an API error from an error response body.
    ///
    /// Discogs error bodies carry a top-level `message` field.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        match status {
            404 => Error::NotFound(message),
            401 => Error::Unauthorized(message),
            _ => Error::Api {
                status,
                message,
                body,
            },
        }
    }
}

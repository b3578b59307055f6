//! Error types shared across the console.
//!
//! A fetch cycle can fail at the transport level, at the authentication level,
//! or while decoding a payload. All of these abort the cycle as a whole and are
//! surfaced to the user as a single error banner with a retry action. Missing or
//! malformed *fields* inside an otherwise valid payload are not errors: they are
//! absorbed by the field resolver's defaults (see [`crate::domain::normalize`]).

use thiserror::Error;

/// Errors produced while fetching or decoding analytics data.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend rejected the bearer credential (401/403).
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// The backend answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Returns true when the failure is an expired or rejected credential.
    ///
    /// The CLI uses this to print a token-specific hint next to the retry
    /// prompt instead of the generic network banner.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Maps a low-level `reqwest` error into the console's error taxonomy.
///
/// Errors that carry an HTTP status are classified by status (401/403 become
/// [`AppError::Unauthorized`]); everything else is a transport failure.
pub fn map_reqwest_error(e: reqwest::Error) -> AppError {
    if let Some(status) = e.status() {
        return map_status(status.as_u16(), e.to_string());
    }

    if e.is_decode() {
        return AppError::decode(e.to_string());
    }

    AppError::transport(e.to_string())
}

/// Classifies an HTTP status code into the error taxonomy.
pub fn map_status(status: u16, message: impl Into<String>) -> AppError {
    match status {
        401 | 403 => AppError::unauthorized(message),
        _ => AppError::api(status, message),
    }
}

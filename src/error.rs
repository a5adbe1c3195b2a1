//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Why a percent change could not be computed.
///
/// These are defined outcomes, not failures: every variant renders as
/// "No data available".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("price history is empty")]
    EmptySeries,

    #[error("no record closed at least {minutes} minutes before now")]
    InsufficientHistory { minutes: i64 },

    #[error("malformed price '{0}'")]
    MalformedPrice(String),

    #[error("reference price is zero")]
    ZeroReferencePrice,

    #[error("percent change overflowed")]
    Overflow,
}

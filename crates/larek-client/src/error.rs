//! HTTP client error types.

use larek_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur when talking to the shop API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with an unexpected status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The server answered without a body.
    #[error("Empty response body")]
    EmptyBody,

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

/// Why an order could not be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The checkout state refused the submission.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The order endpoint failed. The flow is back on the contacts step.
    #[error("Order submission failed: {0}")]
    Submission(#[from] FetchError),
}

//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur while talking to the search backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpRequest(reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("backend returned status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Invalid endpoint URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON decoding of the payload failed.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Expected data missing from the payload.
    #[error("missing data in response: {0}")]
    MissingData(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::HttpRequest(err)
        }
    }
}

impl ApiError {
    /// Check if this error is retryable by the user.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::HttpRequest(_) | Self::HttpStatus(_))
    }
}

/// Convenience result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

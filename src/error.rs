use std::result;

use thiserror::Error;

/// Error types for Places client operations
#[derive(Error, Debug)]
pub enum PlacesError {
    /// HTTP request failed (connection, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Response body could not be decoded as the expected JSON schema
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The search query was empty or all whitespace
    #[error("search query cannot be empty")]
    EmptyQuery,

    /// The configured base URL could not be parsed
    #[error("invalid base URL: {message}")]
    UrlParse { message: String },

    /// The API answered with a non-200 HTTP status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = result::Result<T, PlacesError>;

//! Error types for the IMDb movie picker
//!
//! Provides a single error enum covering fetching, extraction and
//! terminal I/O, with human-readable messages.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all movie picker operations
///
/// Implements Display for human-readable messages and Serialize
/// so errors can be emitted alongside JSON chart dumps.
#[derive(Error, Debug)]
pub enum ImdbError {
    /// HTTP request failed at the transport level (DNS, timeout, reset)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Chart page not found on server
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Rating text could not be read as a number
    #[error("Invalid rating: {0:?}")]
    InvalidRating(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading the answer or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImdbError {
    /// Whether the error means the page arrived but did not have the
    /// expected chart structure
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ImdbError::ParseError(_) | ImdbError::ElementNotFound(_) | ImdbError::InvalidRating(_)
        )
    }
}

impl Serialize for ImdbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for movie picker operations
pub type Result<T> = std::result::Result<T, ImdbError>;

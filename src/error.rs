//! Error types for the movie explorer.

use std::time::Duration;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie explorer.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("Catalog fetch timed out after {0:?}")]
    CatalogTimeout(Duration),

    #[error("Movie not found in catalog: {0}")]
    MovieNotFound(String),

    // Settings errors
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

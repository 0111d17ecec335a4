//! Error types for rs-mikan.
//!
//! Parsers never fail: a missing element degrades to a default value. These
//! errors only surface from configuration and page dispatch.

/// Error type for configuration and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A page kind name that no parser handles.
    #[error("Unknown page kind: {0}")]
    UnknownPage(String),
}

/// Result type alias for configuration and dispatch.
pub type Result<T> = std::result::Result<T, Error>;

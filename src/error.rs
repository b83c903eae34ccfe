// src/error.rs

//! Unified error handling for the PTT client.

use std::fmt;

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A page could not be fetched (network failure or non-2xx status)
    #[error("Fetch failed for {url}: {message}")]
    Fetch {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// A field scan did not line up with the entry count of the page
    #[error(
        "Inconsistent markup in {context}: '{field}' matched {found} node(s), expected {expected}"
    )]
    ParseInconsistency {
        context: String,
        field: String,
        expected: usize,
        found: usize,
    },

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a fetch error from a failed request.
    pub fn fetch(url: impl Into<String>, error: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            status: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
        }
    }

    /// Create a fetch error for a non-success status code.
    pub fn status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Fetch {
            url: url.into(),
            status: Some(status.as_u16()),
            message: format!("unexpected status {status}"),
        }
    }

    /// Create a field-count mismatch error.
    pub fn inconsistency(
        context: impl Into<String>,
        field: impl Into<String>,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::ParseInconsistency {
            context: context.into(),
            field: field.into(),
            expected,
            found,
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistency_message() {
        let err = AppError::inconsistency("board listing", ".author", 20, 19);
        assert_eq!(
            err.to_string(),
            "Inconsistent markup in board listing: '.author' matched 19 node(s), expected 20"
        );
    }

    #[test]
    fn test_status_error_keeps_code() {
        let err = AppError::status("https://www.ptt.cc/bbs/x.html", reqwest::StatusCode::NOT_FOUND);
        match err {
            AppError::Fetch { url, status, .. } => {
                assert_eq!(url, "https://www.ptt.cc/bbs/x.html");
                assert_eq!(status, Some(404));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Error types for browser verification
//!
//! Every pipeline step maps into its own variant so failures carry the
//! operation that produced them. Nothing is retried or recovered; errors
//! propagate up to the binary and terminate the run.

use thiserror::Error;

/// Unified error type for verification runs
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Failed to open tab: {0}")]
    Tab(String),

    #[error("Navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Screenshot capture failed: {0}")]
    Screenshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BrowserError
pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_error_includes_url() {
        let err = BrowserError::Navigation {
            url: "http://localhost:3000".to_string(),
            reason: "connection refused".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("http://localhost:3000"));
        assert!(rendered.contains("connection refused"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BrowserError = io.into();
        assert!(matches!(err, BrowserError::Io(_)));
    }
}

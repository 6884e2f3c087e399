//! Error types for the docsift library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction and ranking.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A collection directory has no input configuration.
    #[error("Collection config not found: {0}")]
    MissingConfig(PathBuf),

    /// The input configuration is structurally invalid.
    #[error("Invalid collection config: {0}")]
    InvalidConfig(String),

    /// A referenced document has no extracted runs file.
    #[error("Missing document runs: {0}")]
    MissingDocument(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingDocument("report.pdf".to_string());
        assert_eq!(err.to_string(), "Missing document runs: report.pdf");

        let err = Error::InvalidConfig("no documents listed".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid collection config: no documents listed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

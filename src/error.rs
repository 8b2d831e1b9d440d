//! Error types for the garagist library.
//!
//! All fallible operations in this crate return [`Result`], whose error
//! type is the [`GaragistError`] enum.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for garagist operations.
#[derive(Error, Debug)]
pub enum GaragistError {
    /// I/O errors (log file, classifier artifact, listeners).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Classifier-related errors (training, artifact load/save).
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Query log errors (append, parse).
    #[error("Log error: {0}")]
    Log(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GaragistError.
pub type Result<T> = std::result::Result<T, GaragistError>;

impl GaragistError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GaragistError::Analysis(msg.into())
    }

    /// Create a new classifier error.
    pub fn classifier<S: Into<String>>(msg: S) -> Self {
        GaragistError::Classifier(msg.into())
    }

    /// Create a new log error.
    pub fn log<S: Into<String>>(msg: S) -> Self {
        GaragistError::Log(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GaragistError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GaragistError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = GaragistError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = GaragistError::classifier("Test classifier error");
        assert_eq!(error.to_string(), "Classifier error: Test classifier error");

        let error = GaragistError::log("Test log error");
        assert_eq!(error.to_string(), "Log error: Test log error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let garagist_error = GaragistError::from(io_error);

        match garagist_error {
            GaragistError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}

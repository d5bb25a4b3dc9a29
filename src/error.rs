//! Error types for fileops
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FileOpsError
pub type Result<T> = std::result::Result<T, FileOpsError>;

/// Unified error type for fileops operations
#[derive(Debug, Error)]
pub enum FileOpsError {
    // -------------------------------------------------------------------------
    // Client Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FileOpsError {
    /// True for errors caused by the caller's input rather than the host
    ///
    /// Callers map these to a client-error response (HTTP 400 in the
    /// dashboard); everything else is an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FileOpsError::InvalidName(_) | FileOpsError::FileNotFound(_)
        )
    }
}

impl From<serde_json::Error> for FileOpsError {
    fn from(e: serde_json::Error) -> Self {
        FileOpsError::Serialization(e.to_string())
    }
}

impl From<tempfile::PersistError> for FileOpsError {
    fn from(e: tempfile::PersistError) -> Self {
        FileOpsError::Io(e.error)
    }
}

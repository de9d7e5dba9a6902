//! Error types for profilecard
//!
//! Only collaborator-boundary failures surface as errors. Invalid editor input
//! is corrected in place and never reaches this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for profilecard operations
pub type CardResult<T> = Result<T, CardError>;

/// Main error type for profilecard operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Placeholder catalog file could not be parsed
    #[error("invalid placeholder catalog in {file}: {message}")]
    InvalidPlaceholders { file: PathBuf, message: String },

    /// Persistence collaborator rejected the profile
    #[error("failed to publish profile: {message}")]
    Persistence { message: String },

    /// Upload collaborator could not store a file
    #[error("failed to upload '{file_name}': {message}")]
    Upload { file_name: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

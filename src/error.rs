//! Error types for path normalization operations

use thiserror::Error;

/// The error type for path normalization operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The input was rejected before any path was built
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The environment could not report the current working directory
    #[error("cannot determine current directory: {message}")]
    WorkingDirectory { message: String },
}

impl PathError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        PathError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::WorkingDirectory {
            message: err.to_string(),
        }
    }
}

/// Result type for path normalization operations
pub type Result<T> = std::result::Result<T, PathError>;

//! Error types for the consent status pipeline.
//!
//! Every error is terminal for a run. Input errors carry the path that failed,
//! and validation errors name the offending email or login so the operator
//! can fix the document and re-run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Data-quality violations found in an otherwise well-formed document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "All entries where a response is not needed should have a 'notes' property providing an explanation, but {email} has no 'notes'. Aborting..."
    )]
    MissingEmailNote { email: String },

    #[error(
        "All entries where consent is not needed should have a 'notes' property providing an explanation, but {login} has no 'notes'. Aborting..."
    )]
    MissingContributorNote { login: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::MissingEmailNote { .. } => 40,
            ValidationError::MissingContributorNote { .. } => 41,
        }
    }

    /// The email or login that failed validation.
    pub fn subject(&self) -> &str {
        match self {
            ValidationError::MissingEmailNote { email } => email,
            ValidationError::MissingContributorNote { login } => login,
        }
    }
}

/// Unified error type for a status run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the input document itself could not be loaded.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Read { .. } | Error::Parse { .. })
    }

    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            Error::Read { .. } => 30,
            Error::Parse { .. } => 31,
            Error::Validation(e) => e.code(),
            Error::Write { .. } => 50,
        }
    }
}

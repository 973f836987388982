//! Error types for report output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ReportError> for consent_common::Error {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Write { path, source } => consent_common::Error::Write { path, source },
        }
    }
}

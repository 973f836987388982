//! Exit codes for the consent-status CLI.
//!
//! Exit code ranges:
//! - 0: report written
//! - 10-19: data errors, fixed by editing the response document
//! - 20-29: environment errors while writing output

use consent_common::Error;

/// Exit codes for a status run.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written.
    Clean = 0,

    /// An exempt entry has no explanatory note.
    ValidationFailed = 11,

    /// The response document is missing, unreadable, or malformed.
    InputError = 12,

    /// The report could not be written.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the error code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ValidationFailed => "ERR_VALIDATION",
            ExitCode::InputError => "ERR_INPUT",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Read { .. } | Error::Parse { .. } => ExitCode::InputError,
            Error::Validation(_) => ExitCode::ValidationFailed,
            Error::Write { .. } => ExitCode::IoError,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

//! Pipeline stages, event names, and per-run log context.

/// Stages of a status run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Startup and option parsing.
    Init,
    /// Reading and parsing the response document.
    Load,
    /// Note requirements for exempt entries.
    Validate,
    /// Bucketing contributors and counting claims.
    Classify,
    /// Console and Markdown output.
    Report,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Load => "load",
            Stage::Validate => "validate",
            Stage::Classify => "classify",
            Stage::Report => "report",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used in logging.
pub mod event_names {
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FINISHED: &str = "run.finished";
    pub const RUN_FAILED: &str = "run.failed";

    pub const LOAD_FINISHED: &str = "load.finished";

    pub const VALIDATE_PASSED: &str = "validate.passed";
    pub const VALIDATE_FAILED: &str = "validate.failed";

    pub const CLASSIFY_FINISHED: &str = "classify.finished";

    pub const REPORT_WRITTEN: &str = "report.written";
    pub const CONSOLE_FAILED: &str = "report.console_failed";
}

/// Correlation fields attached to every event of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub run_id: String,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
        }
    }
}

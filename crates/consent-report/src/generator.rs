//! Report generator implementation.

use crate::config::ReportConfig;
use crate::console;
use crate::error::{ReportError, Result};
use crate::markdown;

use consent_common::{ConsentTally, EmailClaims};
use std::path::Path;
use tracing::debug;

/// Renders console and Markdown views of a tally.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a new report generator with configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Bucket listings followed by the two count tables.
    pub fn console_summary(&self, tally: &ConsentTally, claims: &EmailClaims) -> String {
        let mut out = console::render_buckets(tally, self.config.color);
        out.push_str(&console::render_tables(tally, claims));
        out
    }

    /// Line announcing the report write.
    pub fn update_notice(&self) -> String {
        format!("Updating {} file...", self.config.report_name)
    }

    /// The `status.md` document.
    pub fn markdown(&self, tally: &ConsentTally, claims: &EmailClaims) -> String {
        markdown::render_status(tally, claims, &self.config)
    }
}

/// Write a rendered report, replacing any existing file.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing report");
    std::fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

//! Report configuration.

/// Path of the response document as linked from the Markdown report.
pub const DEFAULT_SOURCE_LINK: &str = "data/dual-license-responses.json";

/// Source of the generating tool as linked from the Markdown report.
pub const DEFAULT_TOOL_LINK: &str = "crates/consent-core/src/main.rs";

/// Name of the generated Markdown report.
pub const DEFAULT_REPORT_NAME: &str = "status.md";

/// Rendering options shared by the console and Markdown views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Relative link to the response document embedded in the Markdown.
    pub source_link: String,
    /// Relative link to the tool that generates the Markdown.
    pub tool_link: String,
    /// File name announced on the console before writing.
    pub report_name: String,
    /// Emit ANSI styling in console output.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source_link: DEFAULT_SOURCE_LINK.to_string(),
            tool_link: DEFAULT_TOOL_LINK.to_string(),
            report_name: DEFAULT_REPORT_NAME.to_string(),
            color: true,
        }
    }
}

impl ReportConfig {
    /// Enable or disable ANSI styling.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }
}

//! Fixed run paths and console options.
//!
//! The response document and report live at fixed paths relative to the
//! working directory. Only presentation switches are configurable.

use std::path::{Path, PathBuf};

/// Response document, relative to the working directory.
pub const INPUT_PATH: &str = "data/dual-license-responses.json";

/// Generated report, relative to the working directory.
pub const OUTPUT_PATH: &str = "status.md";

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    /// The fixed relative paths.
    pub fn fixed() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }

    /// The fixed paths resolved against `root` instead of the working directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            input: root.join(INPUT_PATH),
            output: root.join(OUTPUT_PATH),
        }
    }
}

impl Default for RunPaths {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Whether console output should carry ANSI styling.
///
/// `--no-color` always wins; otherwise the `console` crate decides from the
/// terminal and the `NO_COLOR`/`CLICOLOR` variables.
pub fn resolve_color(no_color_flag: bool) -> bool {
    !no_color_flag && console::colors_enabled()
}

/// Same as [`resolve_color`], for messages written to stderr.
pub fn resolve_stderr_color(no_color_flag: bool) -> bool {
    !no_color_flag && console::colors_enabled_stderr()
}

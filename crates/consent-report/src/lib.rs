//! Status report renderers for dual-license consent tallies.
//!
//! Renders two views of the same tally:
//!
//! - **Console**: colored banners with each bucket's logins, followed by
//!   box-drawn count tables
//! - **Markdown**: the `status.md` document committed next to the data file
//!
//! Rendering is pure: every function returns a `String`, and only
//! [`write_report`] touches the filesystem.
//!
//! # Example
//!
//! ```
//! use consent_common::{ConsentStatus, ConsentTally, EmailClaims};
//! use consent_report::{ReportConfig, ReportGenerator};
//!
//! let mut tally = ConsentTally::default();
//! tally.push(ConsentStatus::Consenting, "octocat");
//! let claims = EmailClaims { claimed: 1, not_claimed: 0 };
//!
//! let generator = ReportGenerator::new(ReportConfig::default().with_color(false));
//! let markdown = generator.markdown(&tally, &claims);
//! assert!(markdown.contains("| Consented | 1 |"));
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod generator;
pub mod markdown;
pub mod table;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use generator::{write_report, ReportGenerator};
pub use table::CountTable;

/// Join logins the way the status report lists them.
pub fn join_logins(logins: &[String]) -> String {
    logins.join(", ")
}

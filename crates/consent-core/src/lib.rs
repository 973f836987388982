//! Dual-license consent status core library.
//!
//! This library provides the status pipeline:
//! - Loading `data/dual-license-responses.json`
//! - Validating notes on exempt entries
//! - Classifying contributors into consent buckets
//! - Rendering and writing `status.md`
//! - Exit codes and logging for the `consent-status` binary
//!
//! The binary entry point is in `main.rs`.

pub mod classify;
pub mod config;
pub mod exit_codes;
pub mod load;
pub mod logging;
pub mod pipeline;
pub mod validate;

pub use config::RunPaths;
pub use exit_codes::ExitCode;
pub use pipeline::{prepare, publish, show, StatusReport};
pub use validate::{validate, ValidatedDocument};

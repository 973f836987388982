//! Structured logging for consent-status.
//!
//! Provides dual-mode logging:
//! - Human-readable console output for interactive use
//! - Machine-parseable JSONL for CI jobs
//!
//! # Usage
//!
//! ```no_run
//! use consent_core::log_event;
//! use consent_core::logging::{
//!     event_names, generate_run_id, init_logging, LogConfig, LogContext, Stage,
//! };
//!
//! init_logging(&LogConfig::from_env(None, None));
//!
//! let ctx = LogContext::new(generate_run_id());
//! log_event!(ctx, INFO, event_names::RUN_STARTED, Stage::Init, "starting status run");
//! ```
//!
//! stdout is reserved for the console report; all log output goes to stderr.

pub mod config;
pub mod events;

pub use config::{LogConfig, LogFormat, LogLevel};
pub use events::{event_names, LogContext, Stage};

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events pass the default filter.
const LOG_TARGETS: [&str; 3] = ["consent_core", "consent_report", "consent_status"];

/// Default filter directive for `level` across the workspace crates.
pub fn default_directive(level: LogLevel) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs. `RUST_LOG`
/// replaces the default filter when set.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.level)));

    match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .flatten_event(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .init();
        }
    }
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    // first 12 hex chars
    format!("run-{}", &uuid.simple().to_string()[..12])
}

/// Structured event logging with run context.
///
/// ```
/// use consent_core::log_event;
/// use consent_core::logging::{event_names, LogContext, Stage};
///
/// let ctx = LogContext::new("run-000000000000");
/// log_event!(ctx, INFO, event_names::LOAD_FINISHED, Stage::Load, "loaded responses",
///     contributors = 42);
/// ```
#[macro_export]
macro_rules! log_event {
    ($ctx:expr, INFO, $event:expr, $stage:expr, $msg:expr $(, $key:ident = $val:expr)*) => {
        tracing::info!(
            event = $event,
            run_id = %$ctx.run_id,
            stage = %$stage,
            $($key = $val,)*
            "{}", $msg
        )
    };
    ($ctx:expr, DEBUG, $event:expr, $stage:expr, $msg:expr $(, $key:ident = $val:expr)*) => {
        tracing::debug!(
            event = $event,
            run_id = %$ctx.run_id,
            stage = %$stage,
            $($key = $val,)*
            "{}", $msg
        )
    };
    ($ctx:expr, WARN, $event:expr, $stage:expr, $msg:expr $(, $key:ident = $val:expr)*) => {
        tracing::warn!(
            event = $event,
            run_id = %$ctx.run_id,
            stage = %$stage,
            $($key = $val,)*
            "{}", $msg
        )
    };
    ($ctx:expr, ERROR, $event:expr, $stage:expr, $msg:expr $(, $key:ident = $val:expr)*) => {
        tracing::error!(
            event = $event,
            run_id = %$ctx.run_id,
            stage = %$stage,
            $($key = $val,)*
            "{}", $msg
        )
    };
}

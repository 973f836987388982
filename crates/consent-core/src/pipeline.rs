//! The status run: load, validate, classify, render, publish.
//!
//! [`prepare`] does everything short of output, so a validation failure
//! leaves no trace on the console or on disk. [`show`] prints the console
//! view and [`publish`] writes the report.

use crate::classify::classify;
use crate::config::RunPaths;
use crate::load::load_document;
use crate::logging::{event_names, LogContext, Stage};
use crate::validate::{validate, ValidatedDocument};
use crate::log_event;

use consent_common::{ConsentTally, EmailClaims, Result};
use consent_report::{write_report, ReportGenerator};
use std::io::{self, Write};

/// Everything a run prints and writes, rendered up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub tally: ConsentTally,
    pub claims: EmailClaims,
    /// Bucket listings and count tables for stdout.
    pub console: String,
    /// Line announcing the report write.
    pub notice: String,
    /// Contents of `status.md`.
    pub markdown: String,
}

/// Render both views for an already validated document.
pub fn build_report(doc: &ValidatedDocument, generator: &ReportGenerator) -> StatusReport {
    let (tally, claims) = classify(doc);
    let console = generator.console_summary(&tally, &claims);
    let markdown = generator.markdown(&tally, &claims);
    StatusReport {
        tally,
        claims,
        console,
        notice: generator.update_notice(),
        markdown,
    }
}

/// Load, validate, classify, and render without producing any output.
pub fn prepare(
    paths: &RunPaths,
    generator: &ReportGenerator,
    ctx: &LogContext,
) -> Result<StatusReport> {
    let doc = load_document(&paths.input)?;
    log_event!(
        ctx,
        DEBUG,
        event_names::LOAD_FINISHED,
        Stage::Load,
        "loaded response document",
        path = tracing::field::display(paths.input.display()),
        claimed_emails = doc.claimed_emails().len(),
        contributors = doc.contributors().len()
    );

    let doc = match validate(doc) {
        Ok(doc) => doc,
        Err(err) => {
            log_event!(
                ctx,
                ERROR,
                event_names::VALIDATE_FAILED,
                Stage::Validate,
                "exempt entry has no notes",
                subject = err.subject(),
                code = err.code()
            );
            return Err(err.into());
        }
    };
    log_event!(
        ctx,
        DEBUG,
        event_names::VALIDATE_PASSED,
        Stage::Validate,
        "all exempt entries carry notes"
    );

    let report = build_report(&doc, generator);
    log_event!(
        ctx,
        INFO,
        event_names::CLASSIFY_FINISHED,
        Stage::Classify,
        "classified responses",
        contributors = report.tally.total(),
        emails = report.claims.total(),
        consenting = report.tally.consenting.len(),
        denying = report.tally.denying.len(),
        consent_not_needed = report.tally.consent_not_needed.len(),
        no_response = report.tally.no_response.len(),
        claimed = report.claims.claimed,
        not_claimed = report.claims.not_claimed
    );
    Ok(report)
}

/// Print the console view and update notice to `out`.
///
/// The console view is informational. A closed or failing stdout is logged
/// and the run goes on to publish.
pub fn show<W: Write>(out: &mut W, report: &StatusReport, ctx: &LogContext) {
    let written = write!(out, "{}", report.console)
        .and_then(|()| writeln!(out, "{}", report.notice))
        .and_then(|()| out.flush());

    match written {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            log_event!(
                ctx,
                DEBUG,
                event_names::CONSOLE_FAILED,
                Stage::Report,
                "stdout closed before console summary was printed"
            );
        }
        Err(err) => {
            log_event!(
                ctx,
                WARN,
                event_names::CONSOLE_FAILED,
                Stage::Report,
                "failed to print console summary",
                error = tracing::field::display(&err)
            );
        }
    }
}

/// Write `status.md`, replacing any previous version.
pub fn publish(report: &StatusReport, paths: &RunPaths, ctx: &LogContext) -> Result<()> {
    write_report(&paths.output, &report.markdown)?;
    log_event!(
        ctx,
        INFO,
        event_names::REPORT_WRITTEN,
        Stage::Report,
        "status report written",
        path = tracing::field::display(paths.output.display()),
        bytes = report.markdown.len()
    );
    Ok(())
}

//! consent-status: tabulate dual-license consent responses.
//!
//! Reads `data/dual-license-responses.json`, prints the consent buckets and
//! counts, and regenerates `status.md`. Both paths are relative to the
//! working directory.

use clap::{Args, Parser};
use consent_common::Error;
use consent_core::config::{resolve_color, resolve_stderr_color, RunPaths};
use consent_core::exit_codes::ExitCode;
use consent_core::log_event;
use consent_core::logging::{
    event_names, generate_run_id, init_logging, LogConfig, LogContext, LogFormat, LogLevel, Stage,
};
use consent_core::pipeline::{prepare, publish, show};
use consent_report::console::error_style;
use consent_report::{ReportConfig, ReportGenerator};

/// Tabulate dual-license consent responses and regenerate status.md
#[derive(Parser)]
#[command(name = "consent-status")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,
}

/// Presentation and logging options. Input and output paths are fixed.
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log output format (human or jsonl)
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();
    let global = &cli.global;

    let cli_level = (global.verbose > 0 || global.quiet)
        .then(|| LogLevel::from_verbosity(global.verbose, global.quiet));
    let log_config = LogConfig::from_env(cli_level, global.log_format);
    init_logging(&log_config);

    let ctx = LogContext::new(generate_run_id());
    log_event!(
        ctx,
        INFO,
        event_names::RUN_STARTED,
        Stage::Init,
        "starting status run",
        version = env!("CARGO_PKG_VERSION"),
        log_format = tracing::field::display(log_config.format)
    );

    let exit_code = match run(&ctx, resolve_color(global.no_color)) {
        Ok(()) => ExitCode::Clean,
        Err(err) => report_failure(&ctx, &err, resolve_stderr_color(global.no_color)),
    };

    log_event!(
        ctx,
        INFO,
        event_names::RUN_FINISHED,
        Stage::Report,
        "status run finished",
        exit_code = tracing::field::display(exit_code)
    );
    std::process::exit(exit_code.as_i32());
}

fn run(ctx: &LogContext, color: bool) -> Result<(), Error> {
    let paths = RunPaths::fixed();
    let generator = ReportGenerator::new(ReportConfig::default().with_color(color));

    let report = prepare(&paths, &generator, ctx)?;

    show(&mut std::io::stdout().lock(), &report, ctx);
    publish(&report, &paths, ctx)
}

fn report_failure(ctx: &LogContext, err: &Error, color: bool) -> ExitCode {
    let code = ExitCode::from(err);
    match err {
        Error::Validation(violation) => {
            eprintln!("{}\n", error_style(color).apply_to(violation.to_string()));
        }
        other => {
            log_event!(
                ctx,
                ERROR,
                event_names::RUN_FAILED,
                Stage::Report,
                "status run failed",
                code = other.code()
            );
            eprintln!("error: {}", other);
        }
    }
    code
}

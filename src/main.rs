use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use node_license_auditor::output::FAILURE_MESSAGE;
use node_license_auditor::AuditOutcome;

mod cli;
mod commands;

use cli::Cli;

/// Violations found
const EXIT_VIOLATIONS: u8 = 1;
/// Policy or manifest could not be loaded
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match commands::handle_check(&cli) {
        Ok(AuditOutcome::Passed) => ExitCode::SUCCESS,
        Ok(AuditOutcome::Failed) => {
            eprintln!("{}", FAILURE_MESSAGE);
            ExitCode::from(EXIT_VIOLATIONS)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the report. `RUST_LOG`
/// overrides the flag-derived level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! The test driver.
//!
//! Collects declarations into the process-wide registry, runs them with the printer
//! selected on the command line, tears the registry down and maps the result to an exit
//! code. [`describeit_main!`](crate::describeit_main) expands to a call of [`run_main`].

use std::{
    io,
    panic,
    process::ExitCode,
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, RunConfig};
use crate::errors::DescribeError;
use crate::outcome::RunSummary;
use crate::printer::{BehavePrinter, JsonPrinter, PrettyPrinter};
use crate::registry::{self, Declaration};

pub mod args;

use args::DescribeArgs;

/// Entry point used by generated `main` functions.
pub fn run_main(declarations: &[Declaration]) -> ExitCode {
    let args = DescribeArgs::parse();
    init_logging();

    match run_with_config(declarations, &args.to_config()) {
        Ok(summary) if summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::FAILURE
        }
    }
}

/// Collects, runs and tears down the process-wide registry.
pub fn run_with_config(
    declarations: &[Declaration],
    config: &RunConfig,
) -> Result<RunSummary, DescribeError> {
    let mut registry = registry::instance()?;
    registry.declare_all(declarations)?;
    debug!(descriptions = registry.descriptions_count(), format = ?config.format, "collected declarations");

    let summary = with_quiet_panics(|| {
        let stdout = io::stdout();
        match config.format {
            OutputFormat::Behave => registry.run_all(&mut BehavePrinter::new(stdout.lock())),
            OutputFormat::Pretty => {
                registry.run_all(&mut PrettyPrinter::stdout(config.color_choice()))
            }
            OutputFormat::Json => registry.run_all(&mut JsonPrinter::new(stdout.lock())),
        }
    })?;

    registry.teardown()?;
    Ok(summary)
}

/// Panics inside test bodies become ERROR outcomes; keep the default hook from also
/// printing them to stderr.
fn with_quiet_panics<T>(f: impl FnOnce() -> T) -> T {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| debug!(%info, "test body panicked")));
    let result = f();
    panic::set_hook(previous);
    result
}

/// Logs go to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

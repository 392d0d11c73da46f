//! `jsonspan-harness`: parses the bundled fixtures once each, then times a
//! repeated parse of `test.json`.
//!
//! Report lines go to stdout; diagnostics go to stderr through `tracing`
//! (filter with `RUST_LOG`). Exits 0 when every test passed, 1 otherwise.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod report;
mod suite;

use cli::Cli;
use report::Reporter;
use suite::Suite;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let colorize = cli.color.use_color(stdout.is_terminal());
    let mut reporter = Reporter::new(stdout.lock(), colorize);

    let suite = Suite {
        fixtures: cli.fixtures.clone(),
        iterations: cli.iterations,
        options: cli.parser_options(),
    };

    match suite.run(&mut reporter) {
        Ok(tally) if tally.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            error!(error = %err, "failed to write report");
            ExitCode::FAILURE
        }
    }
}

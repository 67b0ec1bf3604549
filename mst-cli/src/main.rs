//! Entry point for the MST solver CLI.
//!
//! Bootstraps MPI, installs structured logging, parses arguments, dispatches
//! the requested algorithm, and renders the final tree on rank 0. Every rank
//! in the `mpirun` launch runs this same binary in lockstep.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use mst_cli::{
    cli::{Cli, CliError, Outcome, render_outcome, run_cli},
    logging::{self, LoggingError},
};
use mst_core::ProcessGroup;
use mst_mpi::MpiProcessGroup;
use tracing::error;

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let group = MpiProcessGroup::init();

    match run_cli(cli, &group) {
        Ok(outcome) => render_and_exit(&outcome, group.rank()),
        Err(err) => report_failure(&err, group.rank()),
    }
}

fn render_and_exit(outcome: &Outcome, rank: usize) -> ExitCode {
    if rank != 0 {
        return ExitCode::SUCCESS;
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if let Err(err) = render_outcome(outcome, &mut writer).and_then(|()| writer.flush()) {
        error!(error = %err, "failed to write output");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Emits an `ERROR:`-prefixed diagnostic on standard output and logs the
/// structured cause via `tracing`. Only rank 0 emits the diagnostic; a
/// failure on any rank is treated as fatal to the whole process group.
fn report_failure(err: &CliError, rank: usize) -> ExitCode {
    error!(error = %err, rank, "command execution failed");
    if rank == 0 {
        print_diagnostic(err);
    }
    ExitCode::FAILURE
}

/// Prints the `ERROR:`-prefixed diagnostic line to standard output.
#[expect(
    clippy::print_stdout,
    reason = "ERROR: diagnostics belong on stdout, not stderr"
)]
fn print_diagnostic(err: &CliError) {
    println!("ERROR: {err}");
}

/// Emit a fallback diagnostic to stderr when tracing initialization fails.
#[expect(
    clippy::print_stderr,
    reason = "emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

//! Command-line interface orchestration for the MST solver.
//!
//! Offers `solve` (compute an MST over an adjacency matrix, using a `clap`-
//! parsed algorithm name and process-group supplied by `main`) and
//! `generate` (build a reproducible random connected graph for testing).

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateArgs, Outcome, SolveArgs, render_outcome, run_cli,
};

//! Command-line interface orchestration for the MST solver: `clap`-based
//! argument parsing, algorithm dispatch, adjacency-matrix loading via
//! `mst-io`, and rank-0-only rendering of the final tree.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mst_core::{Algorithm, Edge, MstError, ProcessGroup, compute_mst};
use mst_io::{AdjacencyMatrix, LoadError, load_from_path, random_connected_graph, write_to_writer};
use thiserror::Error;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "mst-cli", about = "Compute a minimum spanning tree over MPI.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the MST of an adjacency matrix with the chosen algorithm.
    Solve(SolveArgs),
    /// Generate a random connected graph and write it in the adjacency
    /// matrix text format.
    Generate(GenerateArgs),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveArgs {
    /// Path to the adjacency matrix input file.
    pub input: PathBuf,

    /// Algorithm to run: one of `prim-seq`, `kruskal-seq`, `prim-par`,
    /// `kruskal-par`.
    #[arg(long)]
    pub algo: String,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Path to write the generated adjacency matrix to.
    pub output: PathBuf,

    /// Number of vertices.
    #[arg(long)]
    pub n: usize,

    /// Target edge density as a fraction of all possible edges, in `[0, 1]`.
    #[arg(long, default_value_t = 0.2)]
    pub density: f64,

    /// Seed for reproducible generation.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to open or write a file.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Adjacency-matrix loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The requested algorithm name did not match one of the four supported
    /// names, or core-level execution failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// The outcome of executing one CLI command, used by [`render_outcome`].
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The full MST, produced on rank 0 by the `solve` command.
    Tree(Vec<Edge>),
    /// A graph was generated and written to `path`.
    Generated {
        /// Destination file.
        path: PathBuf,
        /// Vertex count of the generated graph.
        n: usize,
        /// Edge count of the generated graph.
        m: usize,
    },
    /// This rank has nothing to report (every non-zero rank for `solve`).
    None,
}

/// Executes the CLI command represented by `cli` against `group`.
///
/// Every rank in the process group must call this with identical `cli`.
/// Non-root ranks receive [`Outcome::None`] for `solve`; `generate` only
/// writes its output file from rank 0.
///
/// # Errors
/// Returns [`CliError`] when loading the input, parsing the algorithm name,
/// or computing the MST fails.
pub fn run_cli(cli: Cli, group: &impl ProcessGroup) -> Result<Outcome, CliError> {
    match cli.command {
        Command::Solve(args) => run_solve(args, group),
        Command::Generate(args) => run_generate(args, group),
    }
}

fn run_solve(args: SolveArgs, group: &impl ProcessGroup) -> Result<Outcome, CliError> {
    let algo = Algorithm::parse(&args.algo)?;
    let AdjacencyMatrix { n, m, adj } = load_from_path(&args.input)?;
    let tree = compute_mst(group, n, m, &adj, algo)?;
    if group.rank() == 0 {
        Ok(Outcome::Tree(tree))
    } else {
        Ok(Outcome::None)
    }
}

fn run_generate(args: GenerateArgs, group: &impl ProcessGroup) -> Result<Outcome, CliError> {
    if group.rank() != 0 {
        return Ok(Outcome::None);
    }

    let matrix = random_connected_graph(args.n, args.density, args.seed);
    let file = std::fs::File::create(&args.output).map_err(|source| CliError::Io {
        path: args.output.clone(),
        source,
    })?;
    write_to_writer(&matrix, io::BufWriter::new(file)).map_err(|source| CliError::Io {
        path: args.output.clone(),
        source,
    })?;

    Ok(Outcome::Generated {
        path: args.output,
        n: matrix.n,
        m: matrix.m,
    })
}

/// Renders `outcome` to `writer` as one `"<i> <j>"` line per tree edge, in
/// the order the algorithm produced them.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_outcome(outcome: &Outcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Tree(tree) => {
            for edge in tree {
                writeln!(writer, "{} {}", edge.source(), edge.target())?;
            }
        }
        Outcome::Generated { path, n, m } => {
            writeln!(writer, "wrote {n}-vertex, {m}-edge graph to {}", path.display())?;
        }
        Outcome::None => {}
    }
    Ok(())
}

//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so benchmark helper
//! functions stay readable and `criterion::BenchmarkId` labels stay
//! consistent across the sequential and parallel benchmark binaries.

use std::fmt;

/// Parameters for a sequential-algorithm benchmark run.
#[derive(Clone, Debug)]
pub struct SequentialBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
}

impl fmt::Display for SequentialBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

/// Parameters for a parallel-algorithm benchmark run.
#[derive(Clone, Debug)]
pub struct ParallelBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of simulated ranks in the loopback process group.
    pub num_procs: usize,
}

impl fmt::Display for ParallelBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.num_procs)
    }
}

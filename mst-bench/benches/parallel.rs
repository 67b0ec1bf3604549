//! Parallel Prim and Kruskal benchmarks.
//!
//! Measures wall-clock time to compute the MST of a reproducible random
//! connected graph across a simulated process group, using the in-process
//! `std::sync::mpsc`-backed loopback group so the benchmark runs without a
//! system MPI installation.
#![allow(missing_docs, reason = "Criterion macros generate undocumented items")]
#![allow(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]
#![allow(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
#![allow(
    clippy::excessive_nesting,
    reason = "Criterion bench_with_input + thread::scope requires deep nesting"
)]

use std::thread;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use mst_bench::params::ParallelBenchParams;
use mst_core::testing::build_loopback_group;
use mst_core::{Algorithm, compute_mst};
use mst_io::{AdjacencyMatrix, random_connected_graph};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 42;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[50, 200, 800];

/// Process counts to benchmark.
const PROCESS_COUNTS: &[usize] = &[2, 4, 8];

/// Target edge density for generated graphs.
const DENSITY: f64 = 0.2;

fn run_parallel(matrix: &AdjacencyMatrix, algo: Algorithm, num_procs: usize) {
    let groups = build_loopback_group(num_procs);
    thread::scope(|scope| {
        for group in groups {
            scope.spawn(move || {
                compute_mst(&group, matrix.n, matrix.m, &matrix.adj, algo)
                    .expect("parallel algorithm must succeed");
            });
        }
    });
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    group.sample_size(10);

    for &vertex_count in VERTEX_COUNTS {
        let matrix = random_connected_graph(vertex_count, DENSITY, SEED);

        for &num_procs in PROCESS_COUNTS {
            let params = ParallelBenchParams { vertex_count, num_procs };

            for algo in [Algorithm::PrimPar, Algorithm::KruskalPar] {
                let id = BenchmarkId::new(algo.name(), &params);
                group.bench_with_input(id, &matrix, |b, matrix| {
                    b.iter(|| run_parallel(matrix, algo, num_procs));
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_parallel);
criterion_main!(benches);

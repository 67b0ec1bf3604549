//! Benchmark support crate for the MST solver.
//!
//! Provides reproducible synthetic graphs and parameter types used by
//! Criterion benchmarks covering the four algorithm variants.

pub mod params;

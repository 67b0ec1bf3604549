//! Adjacency-matrix loading and synthetic graph generation for the MST
//! solver.
//!
//! `mst-core` knows nothing about files or randomness; it only consumes a
//! dense `Vec<i64>` adjacency matrix. This crate is the thing that builds
//! one, either by parsing the on-disk text format or by generating a random
//! connected graph for tests and benchmarks.

mod format;
mod generator;

pub use format::{AdjacencyMatrix, LoadError, load_from_path, load_from_reader, write_to_writer};
pub use generator::random_connected_graph;

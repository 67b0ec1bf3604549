//! Sequential Kruskal's algorithm: sort all edges, then union-find select.
//! Output is sorted by the canonical edge order.

use crate::{adjacency::Adjacency, edge::Edge, union_find::union_find_build};

/// Computes the MST of the graph described by `adj` (a dense, row-major
/// `n x n` matrix) using sequential Kruskal's algorithm.
pub(crate) fn sequential_kruskal(n: usize, adj: &[i64]) -> Vec<Edge> {
    let adjacency = Adjacency::new(adj, n);
    let mut edges = adjacency.all_edges();
    edges.sort_unstable();

    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    union_find_build(&edges, n, &mut tree);
    tree
}

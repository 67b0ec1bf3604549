//! Synthetic connected-graph generation, used by tests and by `mst-bench` to
//! build reproducible inputs without shipping fixture files.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::format::AdjacencyMatrix;

/// Minimum and maximum (inclusive) edge weight assigned to generated edges.
const MIN_WEIGHT: i64 = 1;
const MAX_WEIGHT: i64 = 1000;

/// Generates a random connected graph on `n` vertices.
///
/// A random spanning tree is built first (vertex `i` links to a uniformly
/// random earlier vertex, guaranteeing connectivity by construction), then
/// extra edges are added so that the expected edge density approaches
/// `density` (a fraction of the `n * (n - 1) / 2` possible edges, clamped to
/// `[0.0, 1.0]`). `seed` makes the result reproducible across runs, matching
/// the `StdRng`-seeded generators used elsewhere in the graph-algorithm
/// corpus for reproducible synthetic inputs.
///
/// # Panics
///
/// Panics if `n == 0`; a graph needs at least one vertex.
#[must_use]
pub fn random_connected_graph(n: usize, density: f64, seed: u64) -> AdjacencyMatrix {
    assert!(n > 0, "random_connected_graph requires at least one vertex");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::empty(n);

    for vertex in 1..n {
        let parent = rng.random_range(0..vertex);
        let weight = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT);
        matrix.set_edge(parent, vertex, weight);
    }
    matrix.m = n - 1;

    if n < 2 {
        return matrix;
    }

    let max_possible = n * (n - 1) / 2;
    let target_extra = extra_edge_target(density, max_possible, n - 1);

    let mut added = 0;
    // Bounded attempt count: a fully connected graph caps the number of
    // distinct pairs, so this terminates even if every remaining pair is
    // already an edge.
    let max_attempts = target_extra.saturating_mul(8).max(n);
    for _ in 0..max_attempts {
        if added >= target_extra {
            break;
        }
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i == j || matrix.adj.get(i * n + j).copied().unwrap_or(0) != 0 {
            continue;
        }
        let weight = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT);
        matrix.set_edge(i, j, weight);
        matrix.m += 1;
        added += 1;
    }

    matrix
}

fn extra_edge_target(density: f64, max_possible: usize, tree_edges: usize) -> usize {
    #[expect(
        clippy::float_arithmetic,
        reason = "density is a fractional scale factor over the edge budget"
    )]
    let clamped = density.clamp(0.0, 1.0);
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "max_possible is bounded by n*(n-1)/2 for graphs this generator can hold in memory"
    )]
    let wanted = (max_possible as f64 * clamped) as usize;
    wanted.saturating_sub(tree_edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_connected(matrix: &AdjacencyMatrix) -> bool {
        let n = matrix.n;
        let mut visited = vec![false; n];
        let mut stack = vec![0usize];
        visited[0] = true;
        let mut count = 1;
        while let Some(node) = stack.pop() {
            for next in 0..n {
                if !visited[next] && matrix.adj[node * n + next] != 0 {
                    visited[next] = true;
                    count += 1;
                    stack.push(next);
                }
            }
        }
        count == n
    }

    #[test]
    fn generated_graph_is_always_connected() {
        for seed in 0..5u64 {
            let matrix = random_connected_graph(20, 0.3, seed);
            assert!(is_connected(&matrix), "seed {seed} produced a disconnected graph");
        }
    }

    #[test]
    fn generated_graph_has_zero_diagonal_and_is_symmetric() {
        let matrix = random_connected_graph(10, 0.5, 7);
        for i in 0..matrix.n {
            assert_eq!(matrix.adj[i * matrix.n + i], 0);
            for j in 0..matrix.n {
                assert_eq!(matrix.adj[i * matrix.n + j], matrix.adj[j * matrix.n + i]);
            }
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        let first = random_connected_graph(15, 0.4, 99);
        let second = random_connected_graph(15, 0.4, 99);
        assert_eq!(first, second);
    }

    #[test]
    fn single_vertex_graph_has_no_edges() {
        let matrix = random_connected_graph(1, 0.9, 1);
        assert_eq!(matrix.m, 0);
        assert_eq!(matrix.adj, vec![0]);
    }

    #[test]
    fn density_zero_yields_only_the_spanning_tree() {
        let matrix = random_connected_graph(12, 0.0, 3);
        assert_eq!(matrix.m, 11);
        assert!(is_connected(&matrix));
    }
}

//! Shared test fixtures for building dense adjacency matrices from edge
//! lists. Used by the sequential and parallel algorithm test modules so each
//! one doesn't hand-roll its own row-major layout.

#![cfg(test)]

use crate::edge::Edge;

/// Builds an `n x n` symmetric, zero-diagonal, row-major adjacency matrix
/// from an edge list given as `(source, target, weight)` triples.
#[must_use]
pub(crate) fn dense_matrix(n: usize, edges: &[(usize, usize, i64)]) -> Vec<i64> {
    let mut matrix = vec![0_i64; n * n];
    for &(i, j, w) in edges {
        let edge = Edge::new(i, j, w);
        matrix[edge.source() * n + edge.target()] = w;
        matrix[edge.target() * n + edge.source()] = w;
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_matrix_is_symmetric_with_zero_diagonal() {
        let matrix = dense_matrix(3, &[(0, 1, 4), (1, 2, 5)]);
        assert_eq!(matrix[0 * 3 + 1], 4);
        assert_eq!(matrix[1 * 3 + 0], 4);
        assert_eq!(matrix[1 * 3 + 2], 5);
        assert_eq!(matrix[2 * 3 + 1], 5);
        for i in 0..3 {
            assert_eq!(matrix[i * 3 + i], 0);
        }
    }
}

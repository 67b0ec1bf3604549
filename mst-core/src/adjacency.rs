//! Helpers for reading edges out of the dense, row-major adjacency matrix.
//! Shared by sequential Kruskal and every row-block extraction performed by
//! parallel Kruskal.

use crate::edge::Edge;

/// A read-only view over a dense `n x n` adjacency matrix (symmetric, zero
/// diagonal, `0` meaning "no edge").
#[derive(Clone, Copy, Debug)]
pub(crate) struct Adjacency<'a> {
    weights: &'a [i64],
    n: usize,
}

impl<'a> Adjacency<'a> {
    pub(crate) fn new(weights: &'a [i64], n: usize) -> Self {
        debug_assert_eq!(weights.len(), n * n);
        Self { weights, n }
    }

    /// Returns `adj[i, j]`, `0` meaning "no edge".
    pub(crate) fn weight(&self, i: usize, j: usize) -> i64 {
        self.weights[i * self.n + j]
    }

    /// Enumerates every non-zero edge `(i, j)` with `i <= j` in the full
    /// upper triangle (component A's `create_edges`).
    pub(crate) fn all_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for i in 0..self.n {
            for j in i..self.n {
                let w = self.weight(i, j);
                if w != 0 {
                    edges.push(Edge::new(i, j, w));
                }
            }
        }
        edges
    }

    /// Enumerates non-zero edges whose both endpoints lie in row block
    /// `[row_start, row_start + nb_rows)` (clamped to `n`), restricted to the
    /// on-diagonal submatrix upper triangle — component F's `add_local_edges`.
    pub(crate) fn block_diagonal_edges(&self, row_start: usize, nb_rows: usize) -> Vec<Edge> {
        let mut edges = Vec::new();
        let row_end = (row_start + nb_rows).min(self.n);
        for real_i in row_start..row_end {
            for j in row_start..=real_i {
                let w = self.weight(real_i, j);
                if w != 0 {
                    edges.push(Edge::new(real_i, j, w));
                }
            }
        }
        edges
    }

    /// Enumerates non-zero edges between row block `[row_start, row_start +
    /// nb_rows)` and column range `[col_start, col_end)` — component F's
    /// `add_edges_from_submatrix` (the bipartite submatrix).
    pub(crate) fn bipartite_edges(
        &self,
        row_start: usize,
        nb_rows: usize,
        col_start: usize,
        col_end: usize,
    ) -> Vec<Edge> {
        let mut edges = Vec::new();
        let row_end = (row_start + nb_rows).min(self.n);
        for real_i in row_start..row_end {
            for j in col_start..col_end {
                let w = self.weight(real_i, j);
                if w != 0 {
                    edges.push(Edge::new(real_i, j, w));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(rows: &[Vec<i64>]) -> Vec<i64> {
        rows.iter().flatten().copied().collect()
    }

    #[test]
    fn all_edges_reads_upper_triangle_only() {
        #[rustfmt::skip]
        let matrix = square(&[
            vec![0, 1, 4],
            vec![1, 0, 2],
            vec![4, 2, 0],
        ]);
        let adj = Adjacency::new(&matrix, 3);
        let mut edges = adj.all_edges();
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 4)]
        );
    }

    #[test]
    fn block_diagonal_edges_respects_row_block_bounds() {
        #[rustfmt::skip]
        let matrix = square(&[
            vec![0, 1, 0, 9],
            vec![1, 0, 2, 9],
            vec![0, 2, 0, 3],
            vec![9, 9, 3, 0],
        ]);
        let adj = Adjacency::new(&matrix, 4);
        let mut edges = adj.block_diagonal_edges(0, 2);
        edges.sort();
        assert_eq!(edges, vec![Edge::new(0, 1, 1)]);
    }

    #[test]
    fn bipartite_edges_only_covers_requested_rectangle() {
        #[rustfmt::skip]
        let matrix = square(&[
            vec![0, 1, 5, 0],
            vec![1, 0, 0, 6],
            vec![5, 0, 0, 2],
            vec![0, 6, 2, 0],
        ]);
        let adj = Adjacency::new(&matrix, 4);
        let mut edges = adj.bipartite_edges(0, 2, 2, 4);
        edges.sort();
        assert_eq!(edges, vec![Edge::new(0, 2, 5), Edge::new(1, 3, 6)]);
    }
}

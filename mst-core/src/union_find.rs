//! Disjoint-set forest (union-find) over vertex ids.
//!
//! Path-compressed, rank-weighted; `union` expects two roots, so callers must
//! resolve both endpoints with `find` first.

use crate::edge::Edge;

/// A path-compressed, rank-weighted disjoint-set forest over `0..n`.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    father: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Initialises `n` singleton sets, each its own root with rank 1.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            father: (0..n).collect(),
            rank: vec![1; n],
        }
    }

    /// Returns the root of `node`'s set, compressing the traversed chain so
    /// every visited node points directly at the root.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.father[root] != root {
            root = self.father[root];
        }

        while self.father[node] != node {
            let next = self.father[node];
            self.father[node] = root;
            node = next;
        }

        root
    }

    /// Unions the sets rooted at `a` and `b`. Both arguments must already be
    /// roots (callers test `find(i) != find(j)` first); a call with `a == b`
    /// is a caller-side no-op.
    pub(crate) fn union(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if self.rank[a] < self.rank[b] {
            (a, b)
        } else {
            (b, a)
        };
        self.father[lo] = hi;
        if self.rank[a] == self.rank[b] {
            self.rank[hi] += 1;
        }
    }
}

/// Builds a spanning forest from `sorted_edges` (already in the canonical
/// edge order) over `node_count` vertices, appending accepted edges to
/// `tree_out` and stopping once `node_count - 1` edges have been emitted.
///
/// Reused verbatim by sequential Kruskal, per-rank submatrix forest
/// construction, bipartite submatrix forest construction, and every merge
/// step of parallel Kruskal. Returns the number of edges emitted.
pub(crate) fn union_find_build(
    sorted_edges: &[Edge],
    node_count: usize,
    tree_out: &mut Vec<Edge>,
) -> usize {
    let mut sets = DisjointSet::new(node_count);
    let target = node_count.saturating_sub(1);
    let mut emitted = 0;

    for edge in sorted_edges {
        if emitted >= target {
            break;
        }
        let root_a = sets.find(edge.source());
        let root_b = sets.find(edge.target());
        if root_a != root_b {
            sets.union(root_a, root_b);
            tree_out.push(*edge);
            emitted += 1;
        }
    }

    emitted
}

//! Parallel Kruskal's algorithm: row-block submatrix forests, hypercube-
//! style pairwise merges with edge re-sorting.

use super::merge::merge_sorted;
use crate::{
    adjacency::Adjacency,
    edge::Edge,
    process_group::ProcessGroup,
    union_find::union_find_build,
};

const FOREST_TAG: i32 = 0;

fn local_forest(adjacency: &Adjacency<'_>, rank: usize, nb_rows: usize, n: usize) -> Vec<Edge> {
    let mut edges = adjacency.block_diagonal_edges(rank * nb_rows, nb_rows);
    edges.sort_unstable();
    let mut tree = Vec::new();
    union_find_build(&edges, n, &mut tree);
    tree
}

fn bipartite_forest(
    adjacency: &Adjacency<'_>,
    rank: usize,
    step: usize,
    nb_rows: usize,
    n: usize,
) -> Vec<Edge> {
    let start = (rank - rank % step - step) * nb_rows;
    let mut edges = adjacency.bipartite_edges(rank * nb_rows, nb_rows, start, start + nb_rows * step);
    edges.sort_unstable();
    let mut tree = Vec::new();
    union_find_build(&edges, n, &mut tree);
    tree
}

/// Receives the peer group leader's forest, then one bipartite forest per
/// rank in `[rank + step, rank + 2 * step)`, merges everything (including
/// the locally held `forest`) and re-selects via union-find.
fn receive_and_merge(
    group: &impl ProcessGroup,
    rank: usize,
    num_procs: usize,
    step: usize,
    n: usize,
    forest: &[Edge],
) -> Vec<Edge> {
    let mut merged: Vec<Edge> = Vec::new();

    let peer_leader = rank + step;
    if peer_leader < num_procs {
        merged = group.receive_edges(peer_leader, FOREST_TAG);
    }

    for offset in 0..step {
        let src = rank + step + offset;
        if src >= num_procs {
            break;
        }
        let incoming = group.receive_edges(src, FOREST_TAG);
        merged = merge_sorted(&merged, &incoming);
    }

    let combined = merge_sorted(forest, &merged);
    let mut new_forest = Vec::new();
    union_find_build(&combined, n, &mut new_forest);
    new_forest
}

/// Computes the MST of the graph described by `adj` using parallel
/// Kruskal's algorithm across `group`. Every rank must call this function;
/// only rank 0's return value is the complete tree.
pub(crate) fn parallel_kruskal(group: &impl ProcessGroup, n: usize, adj: &[i64]) -> Vec<Edge> {
    let rank = group.rank();
    let num_procs = group.size();
    let nb_rows = n.div_ceil(num_procs.max(1));
    let adjacency = Adjacency::new(adj, n);

    let mut forest = local_forest(&adjacency, rank, nb_rows, n);

    let mut receiver = true;
    let mut step = 1usize;
    let mut hypercube_rank = rank;
    while step.saturating_mul(nb_rows) < n {
        if hypercube_rank & 1 == 1 {
            receiver = false;
            if rank % step == 0 {
                group.send_edges(rank - step, FOREST_TAG, &forest);
            }
            let bipartite = bipartite_forest(&adjacency, rank, step, nb_rows, n);
            let target = rank - rank % step - step;
            group.send_edges(target, FOREST_TAG, &bipartite);
        } else if receiver {
            forest = receive_and_merge(group, rank, num_procs, step, n, &forest);
        }

        step <<= 1;
        hypercube_rank >>= 1;
    }

    if rank == 0 { forest } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::dense_matrix;
    use crate::testing::build_loopback_group;
    use std::thread;

    fn run(num_procs: usize, n: usize, adj: &[i64]) -> Vec<Edge> {
        let groups = build_loopback_group(num_procs);
        let adj = adj.to_vec();
        let mut results = vec![Vec::new(); num_procs];
        thread::scope(|scope| {
            let handles: Vec<_> = groups
                .into_iter()
                .map(|group| {
                    let adj = adj.clone();
                    scope.spawn(move || parallel_kruskal(&group, n, &adj))
                })
                .collect();
            for (slot, handle) in results.iter_mut().zip(handles) {
                *slot = handle.join().expect("rank thread must not panic");
            }
        });
        std::mem::take(&mut results[0])
    }

    #[test]
    fn matches_sequential_kruskal_at_various_process_counts() {
        let adj = dense_matrix(
            4,
            &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 3)],
        );
        let expected = vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)];

        for num_procs in [1, 2, 4] {
            let mut tree = run(num_procs, 4, &adj);
            tree.sort_unstable();
            assert_eq!(tree, expected, "mismatch at P={num_procs}");
        }
    }

    #[test]
    fn single_process_matches_full_graph() {
        let adj = dense_matrix(2, &[(0, 1, 7)]);
        let tree = run(1, 2, &adj);
        assert_eq!(tree, vec![Edge::new(0, 1, 7)]);
    }

    #[test]
    fn handles_process_count_not_dividing_n_evenly() {
        let adj = dense_matrix(
            5,
            &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (0, 4, 9)],
        );
        let mut tree = run(3, 5, &adj);
        tree.sort_unstable();
        let total_weight: i64 = tree.iter().map(Edge::weight).sum();
        assert_eq!(tree.len(), 4);
        assert_eq!(total_weight, 4);
    }
}

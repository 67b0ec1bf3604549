//! Parallel Prim's algorithm: per-rank border array, gather-reduce of
//! candidate edges, broadcast of the chosen vertex.

use crate::{
    adjacency::Adjacency,
    edge::Edge,
    error::MstError,
    process_group::{Candidate, ProcessGroup},
};

/// Per-local-row best candidate edge into the growing tree. `weight == 0`
/// means "no connection yet".
#[derive(Clone, Copy, Debug)]
struct BorderNode {
    weight: i64,
    best_tree_vertex: usize,
}

fn initial_border(adjacency: &Adjacency<'_>, rank: usize, nb_rows: usize, n: usize) -> Vec<BorderNode> {
    let row_end = (rank * nb_rows + nb_rows).min(n);
    (rank * nb_rows..row_end)
        .map(|global_row| BorderNode {
            weight: adjacency.weight(global_row, 0),
            best_tree_vertex: 0,
        })
        .collect()
}

/// Scans the local border for the unvisited row with the minimum candidate
/// edge under the canonical order. Returns `None` ("no local candidate",
/// the `i == -1` sentinel) when every local row is either visited or
/// unconnected to the tree so far.
fn local_candidate(
    border: &[BorderNode],
    rank: usize,
    nb_rows: usize,
    visited: &[bool],
) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for (offset, node) in border.iter().enumerate() {
        let global_row = rank * nb_rows + offset;
        if visited[global_row] || node.weight == 0 {
            continue;
        }
        let candidate = Edge::new(global_row, node.best_tree_vertex, node.weight);
        best = Some(match best {
            Some(current) if current <= candidate => current,
            _ => candidate,
        });
    }
    best
}

/// Selects the global minimum candidate among all ranks' contributions,
/// ignoring sentinels. `None` indicates no rank offered a valid candidate,
/// implying a disconnected input.
fn select_global_min(candidates: &[Candidate]) -> Option<Edge> {
    candidates
        .iter()
        .filter_map(|candidate| candidate.edge)
        .min()
}

fn update_border(
    adjacency: &Adjacency<'_>,
    border: &mut [BorderNode],
    rank: usize,
    nb_rows: usize,
    n: usize,
    visited: &[bool],
    new_vertex: usize,
) {
    let row_end = (rank * nb_rows + nb_rows).min(n);
    for (offset, node) in border.iter_mut().enumerate() {
        let global_row = rank * nb_rows + offset;
        if global_row >= row_end || visited[global_row] {
            continue;
        }
        let w = adjacency.weight(global_row, new_vertex);
        if w == 0 {
            continue;
        }
        let current = Edge::new(global_row, node.best_tree_vertex, node.weight);
        let candidate = Edge::new(global_row, new_vertex, w);
        if node.weight == 0 || candidate < current {
            node.weight = w;
            node.best_tree_vertex = new_vertex;
        }
    }
}

/// Computes the MST of the graph described by `adj` using parallel Prim's
/// algorithm across `group`, starting from vertex 0. Every rank must call
/// this function; only rank 0's return value is the complete tree.
pub(crate) fn parallel_prim(
    group: &impl ProcessGroup,
    n: usize,
    adj: &[i64],
) -> Result<Vec<Edge>, MstError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let rank = group.rank();
    let num_procs = group.size();
    let nb_rows = n.div_ceil(num_procs.max(1));
    let adjacency = Adjacency::new(adj, n);

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut border = initial_border(&adjacency, rank, nb_rows, n);

    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    for iteration in 0..n.saturating_sub(1) {
        let candidate = match local_candidate(&border, rank, nb_rows, &visited) {
            Some(edge) => Candidate::some(edge),
            None => Candidate::none(),
        };

        let mut new_vertex: i64 = -1;
        if let Some(candidates) = group.gather_candidates(candidate) {
            let chosen = select_global_min(&candidates).ok_or(MstError::NoCandidateEdge {
                iteration,
            })?;
            tree.push(chosen);
            // `chosen` is canonicalized (source = min endpoint), so the newly
            // admitted border vertex isn't necessarily `source()` — exactly
            // one endpoint is still unvisited, and that one is the new vertex.
            let admitted = if visited[chosen.source()] {
                chosen.target()
            } else {
                chosen.source()
            };
            new_vertex = i64::try_from(admitted).unwrap_or(-1);
        }

        group.broadcast_vertex(&mut new_vertex);
        #[expect(
            clippy::cast_sign_loss,
            reason = "broadcast_vertex always carries a valid, non-negative vertex id once the rank-0 assertion above has passed"
        )]
        let new_vertex = new_vertex as usize;

        visited[new_vertex] = true;
        update_border(&adjacency, &mut border, rank, nb_rows, n, &visited, new_vertex);
    }

    if rank == 0 {
        Ok(tree)
    } else {
        Ok(Vec::new())
    }
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
        let mut results: Vec<Result<Vec<Edge>, MstError>> =
            (0..num_procs).map(|_| Ok(Vec::new())).collect();
        thread::scope(|scope| {
            let handles: Vec<_> = groups
                .into_iter()
                .map(|group| {
                    let adj = adj.clone();
                    scope.spawn(move || parallel_prim(&group, n, &adj))
                })
                .collect();
            for (slot, handle) in results.iter_mut().zip(handles) {
                *slot = handle.join().expect("rank thread must not panic");
            }
        });
        std::mem::replace(&mut results[0], Ok(Vec::new())).expect("rank 0 must succeed")
    }

    #[test]
    fn matches_sequential_prim_at_various_process_counts() {
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
    fn select_global_min_ignores_sentinels() {
        let candidates = vec![
            Candidate::none(),
            Candidate::some(Edge::new(0, 1, 3)),
            Candidate::none(),
        ];
        assert_eq!(select_global_min(&candidates), Some(Edge::new(0, 1, 3)));
    }

    #[test]
    fn select_global_min_returns_none_when_all_sentinel() {
        let candidates = vec![Candidate::none(), Candidate::none()];
        assert_eq!(select_global_min(&candidates), None);
    }

    #[test]
    fn single_vertex_graph_yields_empty_tree() {
        let adj = dense_matrix(1, &[]);
        assert_eq!(run(1, 1, &adj), Vec::new());
    }
}

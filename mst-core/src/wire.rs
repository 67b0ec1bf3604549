//! MPI wire codec: pack/unpack edge lists to/from the fixed-
//! width integer layout sent over the wire as two messages per pair of
//! processes — a 1-int count, then a flat `3 * count` int buffer laid out
//! `[i, j, w, i, j, w, ...]` — both tagged 0. `mst-mpi`'s [`ProcessGroup`]
//! implementation uses these functions around its two `MPI_Send`/`MPI_Recv`
//! calls; the in-process testing backend passes `Vec<Edge>` directly and
//! does not need them, but they are exercised here so the codec itself is
//! tested independently of any transport.
//!
//! [`ProcessGroup`]: crate::process_group::ProcessGroup

use crate::edge::Edge;

/// Packs `edges` into the flat `3 * count` payload buffer (the second of
/// the two wire messages; the count itself is the buffer's implicit
/// `edges.len()` and is sent separately by the transport).
#[must_use]
pub fn pack_edges(edges: &[Edge]) -> Vec<i64> {
    let mut buffer = Vec::with_capacity(edges.len() * 3);
    for edge in edges {
        let [i, j, w] = edge.to_wire();
        buffer.push(i);
        buffer.push(j);
        buffer.push(w);
    }
    buffer
}

/// Unpacks a flat `3 * count` payload buffer back into an edge list. Panics
/// if `buffer.len()` is not a multiple of 3, which would indicate a
/// transport-level framing bug rather than a recoverable condition.
#[must_use]
pub fn unpack_edges(buffer: &[i64]) -> Vec<Edge> {
    assert!(
        buffer.len() % 3 == 0,
        "wire buffer length {} is not a multiple of 3",
        buffer.len()
    );
    buffer
        .chunks_exact(3)
        .map(|chunk| Edge::from_wire([chunk[0], chunk[1], chunk[2]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_then_unpack_round_trips_in_order() {
        let edges = vec![Edge::new(0, 1, 4), Edge::new(2, 3, 9)];
        let packed = pack_edges(&edges);
        assert_eq!(packed, vec![0, 1, 4, 2, 3, 9]);
        assert_eq!(unpack_edges(&packed), edges);
    }

    #[test]
    fn empty_edge_list_packs_to_empty_buffer() {
        assert!(pack_edges(&[]).is_empty());
        assert!(unpack_edges(&[]).is_empty());
    }
}

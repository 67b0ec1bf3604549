//! The `ProcessGroup` abstraction over a distributed-memory process group.
//! Every parallel algorithm in this crate is generic over this trait rather
//! than depending on a concrete messaging library: `mst-mpi` supplies the
//! real backend, `mst-core::testing` supplies an in-process one for ordinary
//! `cargo test`.

use crate::edge::Edge;

/// A single rank's best candidate edge for the parallel Prim reduction, or
/// the sentinel meaning "no candidate". Public because it appears in
/// [`ProcessGroup`]'s signature, which out-of-crate backends such as
/// `mst-mpi` must be able to implement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub(crate) edge: Option<Edge>,
}

impl Candidate {
    /// The sentinel meaning "this rank has no candidate edge".
    #[must_use]
    pub const fn none() -> Self {
        Self { edge: None }
    }

    /// Wraps a real candidate edge.
    #[must_use]
    pub const fn some(edge: Edge) -> Self {
        Self { edge: Some(edge) }
    }

    /// The candidate's edge, or `None` for the sentinel.
    #[must_use]
    pub const fn edge(self) -> Option<Edge> {
        self.edge
    }

    /// Encodes the candidate as an `[i, j, w]` triple suitable for
    /// `MPI_Gather`, with `i == -1` as the sentinel.
    #[must_use]
    pub fn to_wire(self) -> [i64; 3] {
        match self.edge {
            Some(edge) => edge.to_wire(),
            None => [-1, 0, 0],
        }
    }

    /// Decodes a candidate from the `[i, j, w]` wire triple.
    #[must_use]
    pub fn from_wire(triple: [i64; 3]) -> Self {
        if triple[0] < 0 {
            Self::none()
        } else {
            Self::some(Edge::from_wire(triple))
        }
    }
}

/// Blocking message-passing primitives a parallel MST algorithm needs.
///
/// All methods are synchronous suspension points: a receive blocks until the
/// matching send posts, a gather blocks until every rank has contributed,
/// and a broadcast blocks until the root's value has reached every rank.
/// There is no cancellation or timeout; a transport that cannot satisfy
/// these contracts should panic rather than return a sentinel, treating
/// communication failure as fatal.
pub trait ProcessGroup {
    /// This process's rank, in `0..size()`.
    fn rank(&self) -> usize;

    /// The number of processes in the group.
    fn size(&self) -> usize;

    /// Sends `edges` to rank `to` on the given tag, as the wire format (a
    /// count message followed by the flat payload).
    fn send_edges(&self, to: usize, tag: i32, edges: &[Edge]);

    /// Blocks until an edge list tagged `tag` arrives from rank `from`.
    fn receive_edges(&self, from: usize, tag: i32) -> Vec<Edge>;

    /// Gathers every rank's `candidate` to rank 0. Returns `Some` with one
    /// entry per rank (in rank order) on rank 0, `None` elsewhere.
    fn gather_candidates(&self, candidate: Candidate) -> Option<Vec<Candidate>>;

    /// Broadcasts `value` from rank 0 to every rank, overwriting `value` on
    /// non-root ranks with the root's value.
    fn broadcast_vertex(&self, value: &mut i64);
}

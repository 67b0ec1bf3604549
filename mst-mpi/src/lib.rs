//! MPI-backed [`ProcessGroup`], wrapping `rsmpi`'s `SimpleCommunicator`.
//!
//! Every [`ProcessGroup`] method here is a blocking MPI call. A
//! communication failure is fatal: there is no way for the algorithm layer
//! to recover from a torn send or a peer that vanished, so failures panic
//! rather than thread an error through every call site.

use mpi::topology::SimpleCommunicator;
use mpi::traits::*;

use mst_core::{pack_edges, unpack_edges, Candidate, Edge, ProcessGroup};

/// Owns the MPI runtime handle and the world communicator.
///
/// Dropping this value finalizes MPI. A process should construct exactly
/// one, hold it for the lifetime of its MST computation, and drop it at the
/// end of `main`.
pub struct MpiProcessGroup {
    _universe: mpi::environment::Universe,
    world: SimpleCommunicator,
}

impl MpiProcessGroup {
    /// Initializes the MPI runtime and wraps the default world communicator.
    ///
    /// # Panics
    ///
    /// Panics if the MPI runtime cannot be initialized: this is a fatal
    /// startup failure rather than a recoverable condition, since there is
    /// no meaningful way to run a distributed algorithm without it.
    #[must_use]
    pub fn init() -> Self {
        let universe =
            mpi::initialize().expect("MPI runtime must initialize exactly once per process");
        let world = universe.world();
        Self {
            _universe: universe,
            world,
        }
    }

    fn rank_as_i32(rank: usize) -> i32 {
        #[expect(
            clippy::cast_possible_wrap,
            reason = "process counts this solver targets fit comfortably in i32"
        )]
        {
            rank as i32
        }
    }
}

impl ProcessGroup for MpiProcessGroup {
    fn rank(&self) -> usize {
        #[expect(clippy::cast_sign_loss, reason = "MPI ranks are always non-negative")]
        {
            self.world.rank() as usize
        }
    }

    fn size(&self) -> usize {
        #[expect(
            clippy::cast_sign_loss,
            reason = "MPI communicator size is always non-negative"
        )]
        {
            self.world.size() as usize
        }
    }

    fn send_edges(&self, to: usize, tag: i32, edges: &[Edge]) {
        let payload = pack_edges(edges);
        let process = self.world.process_at_rank(Self::rank_as_i32(to));

        #[expect(
            clippy::cast_possible_wrap,
            reason = "edge counts fit comfortably in i64 for any graph this solver can hold in memory"
        )]
        let count = (payload.len() / 3) as i64;
        process.send_with_tag(&[count], tag);
        if count > 0 {
            process.send_with_tag(&payload[..], tag);
        }
    }

    fn receive_edges(&self, from: usize, tag: i32) -> Vec<Edge> {
        let process = self.world.process_at_rank(Self::rank_as_i32(from));

        let (count_buf, _status) = process.receive_vec_with_tag::<i64>(tag);
        let count = count_buf.first().copied().unwrap_or(0);
        if count <= 0 {
            return Vec::new();
        }

        let (payload, _status) = process.receive_vec_with_tag::<i64>(tag);
        unpack_edges(&payload)
    }

    fn gather_candidates(&self, candidate: Candidate) -> Option<Vec<Candidate>> {
        let wire = candidate.to_wire();
        let root_process = self.world.process_at_rank(0);

        if self.rank() == 0 {
            let mut buffer = vec![0_i64; self.size() * 3];
            root_process.gather_into_root(&wire, &mut buffer);
            Some(
                buffer
                    .chunks_exact(3)
                    .map(|chunk| {
                        let triple = [
                            chunk.first().copied().unwrap_or_default(),
                            chunk.get(1).copied().unwrap_or_default(),
                            chunk.get(2).copied().unwrap_or_default(),
                        ];
                        Candidate::from_wire(triple)
                    })
                    .collect(),
            )
        } else {
            root_process.gather_into(&wire);
            None
        }
    }

    fn broadcast_vertex(&self, value: &mut i64) {
        let root_process = self.world.process_at_rank(0);
        let mut buf = [*value];
        root_process.broadcast_into(&mut buf);
        if let Some(broadcast) = buf.first() {
            *value = *broadcast;
        }
    }
}

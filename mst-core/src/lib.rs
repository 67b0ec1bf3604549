//! Sequential and distributed-memory minimum spanning tree algorithms.
//!
//! Four algorithm variants share two primitives — [`union_find`] and
//! [`heap`] — and a canonical edge order ([`Edge`]) that is the sole source
//! of determinism across process counts. The parallel variants are generic
//! over [`ProcessGroup`] rather than any concrete messaging library; `mst-mpi`
//! supplies the real backend, [`testing::LoopbackGroup`] an in-process one.

mod adjacency;
mod edge;
pub mod error;
mod heap;
mod kruskal;
mod parallel;
mod prim;
mod process_group;
#[cfg(test)]
mod test_support;
mod union_find;
mod wire;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use tracing::instrument;

pub use edge::Edge;
pub use error::{MstError, MstErrorCode, Result};
pub use process_group::{Candidate, ProcessGroup};
pub use wire::{pack_edges, unpack_edges};

/// The four supported MST algorithm variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    /// Sequential Prim's algorithm; requires a process group of size 1.
    PrimSeq,
    /// Sequential Kruskal's algorithm; requires a process group of size 1.
    KruskalSeq,
    /// Parallel Prim's algorithm across any number of processes.
    PrimPar,
    /// Parallel Kruskal's algorithm across any number of processes.
    KruskalPar,
}

impl Algorithm {
    /// Parses one of the four canonical algorithm names. Returns
    /// [`MstError::UnknownAlgorithm`] for anything else.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "prim-seq" => Ok(Self::PrimSeq),
            "kruskal-seq" => Ok(Self::KruskalSeq),
            "prim-par" => Ok(Self::PrimPar),
            "kruskal-par" => Ok(Self::KruskalPar),
            other => Err(MstError::UnknownAlgorithm {
                name: other.to_owned(),
            }),
        }
    }

    /// The canonical name used in CLI input and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrimSeq => "prim-seq",
            Self::KruskalSeq => "kruskal-seq",
            Self::PrimPar => "prim-par",
            Self::KruskalPar => "kruskal-par",
        }
    }

    /// Whether this variant requires a process group of size 1.
    #[must_use]
    pub const fn is_sequential(self) -> bool {
        matches!(self, Self::PrimSeq | Self::KruskalSeq)
    }
}

/// Computes the minimum spanning tree of the graph described by `adj`, a
/// dense, row-major, symmetric `n x n` adjacency matrix with zero diagonal
/// and `0` meaning "no edge". `m` is the number of distinct edges in the
/// upper triangle, used to size sequential Prim's heap.
///
/// Every rank in `group` must call this function with identical `n`, `m`,
/// `adj` and `algo`. The complete tree (`n - 1` edges, or fewer for a
/// disconnected graph) is returned on rank 0; every other rank receives an
/// empty `Vec`. Edge order in the result depends on the algorithm: Kruskal
/// variants return edges in ascending canonical order, while Prim variants
/// return edges in the order they were admitted to the tree.
///
/// # Errors
///
/// Returns [`MstError::WrongProcessCount`] if a sequential variant is asked
/// to run with more than one process, and [`MstError::NoCandidateEdge`] if
/// parallel Prim's reduction ever finds no rank holding a valid candidate
/// (implying a disconnected input).
#[instrument(skip(group, adj), fields(algo = algo.name(), n, num_procs = group.size()))]
pub fn compute_mst(
    group: &impl ProcessGroup,
    n: usize,
    m: usize,
    adj: &[i64],
    algo: Algorithm,
) -> Result<Vec<Edge>> {
    if algo.is_sequential() && group.size() != 1 {
        return Err(MstError::WrongProcessCount {
            algo: algo.name(),
            num_procs: group.size(),
        });
    }

    let tree = match algo {
        Algorithm::PrimSeq => prim::sequential_prim(n, m, adj),
        Algorithm::KruskalSeq => kruskal::sequential_kruskal(n, adj),
        Algorithm::PrimPar => parallel::parallel_prim(group, n, adj)?,
        Algorithm::KruskalPar => parallel::parallel_kruskal(group, n, adj),
    };

    tracing::debug!(edges = tree.len(), "minimum spanning tree computed");
    Ok(tree)
}

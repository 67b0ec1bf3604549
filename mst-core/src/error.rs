//! Error types for the MST core library.
//!
//! Defines the error enum exposed by [`crate::compute_mst`] and a convenient
//! result alias: wrong inputs are programmer errors, not recoverable runtime
//! conditions, so there is no retry path.

use thiserror::Error;

/// Stable codes describing [`MstError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum MstErrorCode {
    /// A sequential algorithm was invoked with more than one process.
    WrongProcessCount,
    /// The requested algorithm name is not one of the four supported names.
    UnknownAlgorithm,
    /// Parallel Prim found no valid candidate edge when one was required.
    NoCandidateEdge,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WrongProcessCount => "MST_WRONG_PROCESS_COUNT",
            Self::UnknownAlgorithm => "MST_UNKNOWN_ALGORITHM",
            Self::NoCandidateEdge => "MST_NO_CANDIDATE_EDGE",
        }
    }
}

/// Error type produced while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A sequential algorithm (`prim-seq`/`kruskal-seq`) was run with a
    /// process group of size other than 1.
    #[error("sequential algorithm {algo} was run with {num_procs} MPI processes")]
    WrongProcessCount {
        /// The algorithm name that requires a single process.
        algo: &'static str,
        /// The actual size of the process group.
        num_procs: usize,
    },
    /// `algo_name` did not match one of the four supported algorithm names.
    #[error("invalid algorithm name: {name}")]
    UnknownAlgorithm {
        /// The unrecognised name supplied by the caller.
        name: String,
    },
    /// Parallel Prim's global reduction found no rank with a valid
    /// candidate edge; this implies the input graph is disconnected, which
    /// violates the documented caller contract.
    #[error("parallel prim found no candidate edge at iteration {iteration}")]
    NoCandidateEdge {
        /// The 0-based iteration (tree edge index) at which the failure
        /// occurred.
        iteration: usize,
    },
}

impl MstError {
    /// Retrieve the stable [`MstErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::WrongProcessCount { .. } => MstErrorCode::WrongProcessCount,
            Self::UnknownAlgorithm { .. } => MstErrorCode::UnknownAlgorithm,
            Self::NoCandidateEdge { .. } => MstErrorCode::NoCandidateEdge,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;

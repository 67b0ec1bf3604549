//! Library surface for the MST solver CLI binary.
//!
//! Kept separate from `main.rs` so the orchestration logic in [`cli`] is
//! exercised by ordinary unit tests against an in-process `ProcessGroup`,
//! without requiring a real MPI launcher.

pub mod cli;
pub mod logging;

//! Error types for the solver crate.

use thiserror::Error;

/// Errors that can occur when running the exhaustive solver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolveError {
    /// The graph is too large for an exhaustive sweep.
    #[error(
        "graph with {n_vertices} vertices exceeds the brute-force limit of {max} \
         (2^{n_vertices} candidates is infeasible)"
    )]
    GraphTooLarge {
        /// Vertices in the rejected graph.
        n_vertices: u32,
        /// The enforced limit.
        max: u32,
    },
}

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

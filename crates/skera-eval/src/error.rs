//! Evaluator error types.

use thiserror::Error;

use skera_graph::GraphError;

/// Result type for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while comparing and exporting results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// An approximate result's assignment does not fit the graph.
    #[error("approximate assignment has {got} bits, graph has {expected} vertices")]
    AssignmentMismatch {
        /// Vertices in the graph under comparison.
        expected: u32,
        /// Bits in the approximate assignment.
        got: u32,
    },

    /// A graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for EvalError {
    fn from(e: serde_json::Error) -> Self {
        EvalError::Json(e.to_string())
    }
}

//! Error types for the graph crate.

use crate::vertex::VertexId;
use thiserror::Error;

/// Errors that can occur when constructing graphs or assignments.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge references a vertex outside the declared vertex range.
    #[error(
        "edge ({}, {}) references vertex {vertex} outside the declared range 0..{n_vertices}",
        .edge.0, .edge.1
    )]
    VertexOutOfRange {
        /// The offending edge as given by the caller.
        edge: (u32, u32),
        /// The endpoint that is out of range.
        vertex: VertexId,
        /// The declared vertex count.
        n_vertices: u32,
    },

    /// An assignment has the wrong number of bits for a graph.
    #[error("assignment has {got} bits, expected {expected}")]
    AssignmentLength {
        /// Number of bits the graph requires.
        expected: u32,
        /// Number of bits the assignment carries.
        got: u32,
    },

    /// An assignment bit is neither 0 nor 1.
    #[error("assignment bit at index {index} is not binary: {value}")]
    NotBinary {
        /// Position of the offending bit.
        index: usize,
        /// The value found there.
        value: String,
    },

    /// A graph document failed to parse.
    #[error("invalid graph JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Json(e.to_string())
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! Vertex and edge types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(u32::try_from(id).expect("VertexId overflow: exceeds u32::MAX"))
    }
}

/// An undirected edge between two vertices.
///
/// Edges are normalized on construction so the smaller endpoint comes
/// first; `Edge::new(2, 0)` and `Edge::new(0, 2)` compare equal. An edge
/// with `u == v` is a self-loop, which can never be cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Edge {
    /// The smaller endpoint.
    pub u: VertexId,
    /// The larger endpoint.
    pub v: VertexId,
}

impl Edge {
    /// Create a normalized edge between two vertices.
    pub fn new(a: impl Into<VertexId>, b: impl Into<VertexId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }

    /// The two endpoints, smaller first.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }
}

impl From<(u32, u32)> for Edge {
    fn from((a, b): (u32, u32)) -> Self {
        Edge::new(a, b)
    }
}

impl From<Edge> for (u32, u32) {
    fn from(edge: Edge) -> Self {
        (edge.u.0, edge.v.0)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.u, self.v)
    }
}

//! The graph a Max-Cut instance is defined over.
//!
//! A [`Graph`] is a set of vertices identified by `0..n` together with a
//! set of undirected edges. Graphs are validated on construction and
//! read-only afterwards: every solver and formulation in the workspace
//! treats them as immutable input.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assignment::Assignment;
use crate::error::{GraphError, GraphResult};
use crate::vertex::{Edge, VertexId};

/// An undirected graph over vertices `0..n_vertices`.
///
/// Parallel edges are collapsed on construction (first occurrence wins)
/// and every endpoint is checked against the declared vertex range, so a
/// constructed graph always satisfies the edge invariant. Self-loops are
/// allowed; they can never contribute to a cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph", into = "RawGraph")]
pub struct Graph {
    n_vertices: u32,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph with `n_vertices` vertices and the given edges.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] when an edge
    /// references a vertex outside `0..n_vertices`. Duplicate edges
    /// (in either orientation) are dropped, keeping the first
    /// occurrence.
    pub fn new(n_vertices: u32, edges: &[(u32, u32)]) -> GraphResult<Self> {
        let mut seen = FxHashSet::default();
        let mut normalized = Vec::with_capacity(edges.len());
        let mut dropped = 0usize;

        for &(a, b) in edges {
            let edge = Edge::new(a, b);
            for vertex in [edge.u, edge.v] {
                if vertex.0 >= n_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        edge: (a, b),
                        vertex,
                        n_vertices,
                    });
                }
            }
            if seen.insert(edge) {
                normalized.push(edge);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(dropped, "collapsed duplicate edges during graph construction");
        }

        Ok(Self {
            n_vertices,
            edges: normalized,
        })
    }

    /// Create a graph from an edge list alone, inferring the vertex
    /// count as the largest endpoint plus one.
    pub fn from_edges(edges: &[(u32, u32)]) -> GraphResult<Self> {
        let n_vertices = edges
            .iter()
            .map(|&(a, b)| a.max(b) + 1)
            .max()
            .unwrap_or(0);
        Self::new(n_vertices, edges)
    }

    /// Construct without validation. Callers must guarantee that every
    /// edge is normalized, deduplicated, and in range.
    pub(crate) fn from_parts(n_vertices: u32, edges: Vec<Edge>) -> Self {
        debug_assert!(edges.iter().all(|e| e.v.0 < n_vertices));
        Self { n_vertices, edges }
    }

    /// Number of vertices.
    pub fn n_vertices(&self) -> u32 {
        self.n_vertices
    }

    /// Number of (deduplicated) edges, self-loops included.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges that could possibly be cut (every non-loop edge).
    ///
    /// No assignment can exceed this value; bipartite graphs reach it.
    pub fn cut_upper_bound(&self) -> u32 {
        self.edges.iter().filter(|e| !e.is_loop()).count() as u32
    }

    /// Count the edges whose endpoints lie on different sides of the
    /// partition described by `assignment`.
    ///
    /// Fails with [`GraphError::AssignmentLength`] when the assignment
    /// does not carry exactly one bit per vertex.
    pub fn cut_value(&self, assignment: &Assignment) -> GraphResult<u32> {
        if assignment.len() != self.n_vertices {
            return Err(GraphError::AssignmentLength {
                expected: self.n_vertices,
                got: assignment.len(),
            });
        }
        let bits = assignment.bits();
        let cut = self
            .edges
            .iter()
            .filter(|e| bits[e.u.0 as usize] != bits[e.v.0 as usize])
            .count();
        Ok(cut as u32)
    }

    /// Parse a graph from its JSON document form.
    ///
    /// The document is re-validated, so an out-of-range edge in a file
    /// fails exactly like one passed to [`Graph::new`].
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let graph = serde_json::from_str(json)?;
        Ok(graph)
    }

    /// Serialize this graph to its pretty-printed JSON document form.
    pub fn to_json(&self) -> GraphResult<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph ({} vertices, {} edges):",
            self.n_vertices,
            self.edges.len()
        )?;
        for edge in &self.edges {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}

/// Wire form of a graph: `{ "n_vertices": N, "edges": [[u, v], ...] }`.
#[derive(Serialize, Deserialize)]
struct RawGraph {
    n_vertices: u32,
    edges: Vec<(u32, u32)>,
}

impl TryFrom<RawGraph> for Graph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        Graph::new(raw.n_vertices, &raw.edges)
    }
}

impl From<Graph> for RawGraph {
    fn from(graph: Graph) -> Self {
        RawGraph {
            n_vertices: graph.n_vertices,
            edges: graph.edges.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_endpoints() {
        let err = Graph::new(3, &[(0, 1), (1, 3)]).unwrap_err();
        match err {
            GraphError::VertexOutOfRange {
                edge,
                vertex,
                n_vertices,
            } => {
                assert_eq!(edge, (1, 3));
                assert_eq!(vertex, VertexId(3));
                assert_eq!(n_vertices, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let g = Graph::new(3, &[(0, 1), (1, 0), (1, 2), (0, 1)]).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.edges()[0], Edge::new(0u32, 1u32));
        assert_eq!(g.edges()[1], Edge::new(1u32, 2u32));
    }

    #[test]
    fn test_from_edges_infers_vertex_count() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        assert_eq!(g.n_vertices(), 4);
        assert_eq!(g.num_edges(), 5);

        let empty = Graph::from_edges(&[]).unwrap();
        assert_eq!(empty.n_vertices(), 0);
    }

    #[test]
    fn test_declared_but_unused_vertices() {
        // Not an error: isolated vertices simply never touch an edge.
        let g = Graph::new(6, &[(0, 1)]).unwrap();
        assert_eq!(g.n_vertices(), 6);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_cut_value() {
        let g = Graph::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        // All on one side: nothing is cut.
        let same = Assignment::zeros(4);
        assert_eq!(g.cut_value(&same).unwrap(), 0);

        // Alternating sides: every ring edge is cut.
        let alternating: Assignment = "0101".parse().unwrap();
        assert_eq!(g.cut_value(&alternating).unwrap(), 4);

        // Half and half: two crossings.
        let halves: Assignment = "0011".parse().unwrap();
        assert_eq!(g.cut_value(&halves).unwrap(), 2);
    }

    #[test]
    fn test_cut_value_length_mismatch() {
        let g = Graph::new(3, &[(0, 1)]).unwrap();
        let err = g.cut_value(&Assignment::zeros(4)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::AssignmentLength {
                expected: 3,
                got: 4
            }
        ));
    }

    #[test]
    fn test_self_loop_never_cut() {
        let g = Graph::new(2, &[(0, 0), (0, 1)]).unwrap();
        assert_eq!(g.cut_upper_bound(), 1);
        let a: Assignment = "01".parse().unwrap();
        assert_eq!(g.cut_value(&a).unwrap(), 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let g = Graph::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        let json = g.to_json().unwrap();
        let back = Graph::from_json(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_json_revalidates() {
        let json = r#"{ "n_vertices": 2, "edges": [[0, 5]] }"#;
        let err = Graph::from_json(json).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn test_display_lists_edges() {
        let g = Graph::new(3, &[(0, 1), (1, 2)]).unwrap();
        let text = format!("{g}");
        assert!(text.contains("3 vertices, 2 edges"));
        assert!(text.contains("v0 -- v1"));
        assert!(text.contains("v1 -- v2"));
    }
}

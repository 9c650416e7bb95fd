//! Skera problem model
//!
//! This crate provides the data structures a Max-Cut instance is made
//! of: the graph, the partition assignments scored against it, and the
//! small library of named instances used throughout the workspace. It
//! is the foundation the formulation, solver, and evaluation crates
//! build on.
//!
//! # Overview
//!
//! The Max-Cut problem: given an undirected graph, split the vertices
//! into two sets so that as many edges as possible run between the
//! sets. An [`Assignment`] gives every vertex a bit naming its side;
//! [`Graph::cut_value`] counts the crossing edges for one assignment.
//!
//! Graphs are validated up front — an edge referencing a vertex outside
//! the declared range is rejected with [`GraphError::VertexOutOfRange`]
//! — and immutable afterwards.
//!
//! # Example
//!
//! ```rust
//! use skera_graph::{Assignment, Graph};
//!
//! // The 4-cycle with a diagonal across 0 and 2.
//! let graph = Graph::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
//!
//! // Separate {0, 2} from {1, 3}: all four cycle edges cross.
//! let assignment: Assignment = "0101".parse().unwrap();
//! assert_eq!(graph.cut_value(&assignment).unwrap(), 4);
//! ```

pub mod assignment;
pub mod dot;
pub mod error;
pub mod generators;
pub mod graph;
pub mod vertex;

pub use assignment::Assignment;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use vertex::{Edge, VertexId};

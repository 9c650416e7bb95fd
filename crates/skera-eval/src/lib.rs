//! Skera evaluation
//!
//! Compares the exact brute-force optimum against a candidate produced
//! by an external approximate optimizer, and exports the comparison as
//! a schema-versioned JSON report.
//!
//! The external routine is opaque: whatever produced the record, only
//! its `(assignment, objective)` pair enters the comparison, and the
//! objective is recomputed on the graph before any ratio is formed.
//!
//! # Example
//!
//! ```rust
//! use skera_eval::{ApproxSolution, Comparison};
//! use skera_graph::generators;
//! use skera_solve::solve;
//!
//! let graph = generators::diamond_4();
//! let exact = solve(&graph).unwrap();
//!
//! let approx = ApproxSolution::from_json(
//!     r#"{ "solver": "qaoa", "assignment": [1, 0, 0, 0], "objective": 3.0 }"#,
//! ).unwrap();
//!
//! let comparison = Comparison::evaluate(&graph, &exact, &approx).unwrap();
//! assert_eq!(comparison.approximation_ratio, 0.75);
//! ```

pub mod approx;
pub mod comparison;
pub mod error;
pub mod export;
pub mod report;

pub use approx::ApproxSolution;
pub use comparison::Comparison;
pub use error::{EvalError, EvalResult};
pub use export::ExportConfig;
pub use report::{CompareReport, GraphSummary, SCHEMA_VERSION};

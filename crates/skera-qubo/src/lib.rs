//! Skera QUBO formulation
//!
//! This crate turns a Max-Cut instance into a quadratic unconstrained
//! binary optimization program. The program is what gets handed to an
//! external optimizer; the cut itself is never solved here.
//!
//! The formulation has one binary variable per vertex and the objective
//!
//! ```text
//! maximize  Σ_{(u,v) ∈ E}  x_u + x_v − 2·x_u·x_v
//! ```
//!
//! whose value at any 0/1 point equals the cut value of the matching
//! partition. That equality is what makes an external solver's objective
//! directly comparable against the exact brute-force baseline.
//!
//! # Example
//!
//! ```rust
//! use skera_graph::{generators, Assignment};
//! use skera_qubo::maxcut_program;
//!
//! let graph = generators::diamond_4();
//! let program = maxcut_program(&graph);
//!
//! let assignment: Assignment = "0101".parse().unwrap();
//! assert_eq!(program.evaluate(&assignment).unwrap(), 4.0);
//! ```

pub mod error;
pub mod lp;
pub mod maxcut;
pub mod program;

pub use error::{QuboError, QuboResult};
pub use lp::to_lp_string;
pub use maxcut::maxcut_program;
pub use program::{QuadraticProgram, Sense};

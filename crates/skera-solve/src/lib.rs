//! Skera exact Max-Cut solver
//!
//! Exhaustive enumeration of every 2-coloring of a graph. The result is
//! the true global maximum cut, not an approximation, which is what
//! makes it the ground-truth baseline an external optimizer's candidate
//! is measured against.
//!
//! The sweep is intentionally exponential (`O(2^n · |E|)` time, `O(n)`
//! space) and refuses graphs above [`MAX_BRUTE_FORCE_VERTICES`].
//!
//! # Example
//!
//! ```rust
//! use skera_graph::generators;
//! use skera_solve::solve;
//!
//! let solution = solve(&generators::diamond_4()).unwrap();
//! assert_eq!(solution.cut_value, 4);
//! assert_eq!(format!("{}", solution.assignment), "0101");
//! ```

pub mod error;
pub mod solver;

pub use error::{SolveError, SolveResult};
pub use solver::{solve, solve_with_observer, ExactSolution, MAX_BRUTE_FORCE_VERTICES};

//! CLI command implementations.

pub mod common;
pub mod compare;
pub mod draw;
pub mod graphs;
pub mod qubo;
pub mod solve;
pub mod version;

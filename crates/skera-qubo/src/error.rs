//! Error types for the QUBO crate.

use thiserror::Error;

/// Errors that can occur when building or evaluating quadratic programs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuboError {
    /// A term references a variable index the program does not have.
    #[error("variable index {index} out of range for program with {num_vars} variables")]
    UnknownVariable {
        /// The offending index.
        index: usize,
        /// Number of variables in the program.
        num_vars: usize,
    },

    /// A variable with this name already exists.
    #[error("duplicate variable name '{0}'")]
    DuplicateVariable(String),

    /// An assignment has the wrong number of bits for this program.
    #[error("assignment has {got} bits, expected {expected} variables")]
    ArityMismatch {
        /// Number of variables in the program.
        expected: usize,
        /// Number of bits the assignment carries.
        got: u32,
    },

    /// A serialized program document is structurally inconsistent.
    #[error("malformed program: {0}")]
    Malformed(String),
}

/// Result type for QUBO operations.
pub type QuboResult<T> = Result<T, QuboError>;

//! The external optimizer's result record.
//!
//! The approximate side of the comparison is an opaque collaborator: a
//! QAOA run, an annealer, anything that hands back a candidate
//! assignment and the objective value it claims for it. This module
//! only defines the record's shape and how it is loaded; nothing here
//! runs an optimizer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use skera_graph::Assignment;

use crate::error::{EvalError, EvalResult};

/// A candidate solution produced outside this workspace.
///
/// The `objective` is whatever the external routine reported; the
/// comparison recomputes the actual cut of `assignment` and never
/// trusts this value for the approximation ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproxSolution {
    /// Label for the routine that produced this record (e.g. `"qaoa"`).
    pub solver: String,
    /// The candidate partition, one bit per vertex.
    pub assignment: Assignment,
    /// Objective value as claimed by the external routine.
    pub objective: f64,
    /// Optimizer iterations, when the routine reports them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    /// Objective evaluations, when the routine reports them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations: Option<u64>,
}

impl ApproxSolution {
    /// Parse a record from its JSON document form.
    ///
    /// Non-binary assignment entries are rejected during parsing, so a
    /// loaded record always carries a well-formed bit sequence.
    pub fn from_json(json: &str) -> EvalResult<Self> {
        let record = serde_json::from_str(json)?;
        Ok(record)
    }

    /// Load a record from a JSON file.
    pub fn from_file(path: &Path) -> EvalResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| EvalError::Io(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let record = ApproxSolution::from_json(
            r#"{ "solver": "qaoa", "assignment": [0, 1, 0, 1], "objective": 4.0 }"#,
        )
        .unwrap();
        assert_eq!(record.solver, "qaoa");
        assert_eq!(format!("{}", record.assignment), "0101");
        assert_eq!(record.objective, 4.0);
        assert!(record.iterations.is_none());
    }

    #[test]
    fn test_from_json_with_metadata() {
        let record = ApproxSolution::from_json(
            r#"{
                "solver": "qaoa",
                "assignment": [1, 0],
                "objective": 1.0,
                "iterations": 100,
                "evaluations": 350
            }"#,
        )
        .unwrap();
        assert_eq!(record.iterations, Some(100));
        assert_eq!(record.evaluations, Some(350));
    }

    #[test]
    fn test_non_binary_assignment_rejected() {
        let err = ApproxSolution::from_json(
            r#"{ "solver": "qaoa", "assignment": [0, 2], "objective": 0.0 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ApproxSolution::from_file(Path::new("/nonexistent/result.json")).unwrap_err();
        assert!(matches!(err, EvalError::Io(_)));
    }
}

//! Exact-vs-approximate comparison.

use serde::{Deserialize, Serialize};

use skera_graph::Graph;
use skera_solve::ExactSolution;

use crate::approx::ApproxSolution;
use crate::error::{EvalError, EvalResult};

/// Tolerance for the claimed objective to count as matching the
/// recomputed cut.
const CLAIM_TOLERANCE: f64 = 1e-6;

/// How an approximate result measures up against the exact optimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Cut value of the approximate assignment, recomputed on the graph.
    pub approx_cut_value: u32,
    /// Objective value the external routine claimed.
    pub claimed_objective: f64,
    /// Whether the claimed objective agrees with the recomputed cut.
    pub matches_claim: bool,
    /// Recomputed cut over the exact optimum; 1.0 when the optimum is 0.
    pub approximation_ratio: f64,
    /// Exact optimum minus the recomputed cut.
    pub absolute_gap: u32,
    /// Whether the approximate assignment reaches the exact optimum.
    pub is_optimal: bool,
}

impl Comparison {
    /// Score an approximate result against the exact solution of the
    /// same graph.
    ///
    /// The approximate cut is always recomputed from the assignment;
    /// the claimed objective only feeds the `matches_claim` check. An
    /// assignment with the wrong number of bits fails with
    /// [`EvalError::AssignmentMismatch`].
    pub fn evaluate(
        graph: &Graph,
        exact: &ExactSolution,
        approx: &ApproxSolution,
    ) -> EvalResult<Self> {
        if approx.assignment.len() != graph.n_vertices() {
            return Err(EvalError::AssignmentMismatch {
                expected: graph.n_vertices(),
                got: approx.assignment.len(),
            });
        }

        let approx_cut_value = graph.cut_value(&approx.assignment)?;
        let approximation_ratio = if exact.cut_value == 0 {
            1.0
        } else {
            f64::from(approx_cut_value) / f64::from(exact.cut_value)
        };

        Ok(Self {
            approx_cut_value,
            claimed_objective: approx.objective,
            matches_claim: (approx.objective - f64::from(approx_cut_value)).abs()
                < CLAIM_TOLERANCE,
            approximation_ratio,
            absolute_gap: exact.cut_value - approx_cut_value,
            is_optimal: approx_cut_value == exact.cut_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skera_graph::generators;
    use skera_solve::solve;

    fn approx(bits: &str, objective: f64) -> ApproxSolution {
        ApproxSolution {
            solver: "qaoa".to_string(),
            assignment: bits.parse().unwrap(),
            objective,
            iterations: None,
            evaluations: None,
        }
    }

    #[test]
    fn test_optimal_candidate() {
        let graph = generators::diamond_4();
        let exact = solve(&graph).unwrap();
        let comparison = Comparison::evaluate(&graph, &exact, &approx("1010", 4.0)).unwrap();

        assert_eq!(comparison.approx_cut_value, 4);
        assert!(comparison.is_optimal);
        assert!(comparison.matches_claim);
        assert_eq!(comparison.approximation_ratio, 1.0);
        assert_eq!(comparison.absolute_gap, 0);
    }

    #[test]
    fn test_suboptimal_candidate() {
        let graph = generators::diamond_4();
        let exact = solve(&graph).unwrap();
        // {0} vs {1,2,3}: cuts (0,1), (3,0), (0,2).
        let comparison = Comparison::evaluate(&graph, &exact, &approx("1000", 3.0)).unwrap();

        assert_eq!(comparison.approx_cut_value, 3);
        assert!(!comparison.is_optimal);
        assert_eq!(comparison.approximation_ratio, 0.75);
        assert_eq!(comparison.absolute_gap, 1);
    }

    #[test]
    fn test_inflated_claim_detected() {
        let graph = generators::diamond_4();
        let exact = solve(&graph).unwrap();
        // Claims the optimum but the assignment only cuts 3 edges.
        let comparison = Comparison::evaluate(&graph, &exact, &approx("1000", 4.0)).unwrap();

        assert!(!comparison.matches_claim);
        // The ratio comes from the recomputed cut, not the claim.
        assert_eq!(comparison.approximation_ratio, 0.75);
    }

    #[test]
    fn test_zero_optimum_ratio_is_one() {
        let graph = skera_graph::Graph::new(3, &[]).unwrap();
        let exact = solve(&graph).unwrap();
        let comparison = Comparison::evaluate(&graph, &exact, &approx("110", 0.0)).unwrap();

        assert_eq!(comparison.approximation_ratio, 1.0);
        assert!(comparison.is_optimal);
    }

    #[test]
    fn test_length_mismatch() {
        let graph = generators::diamond_4();
        let exact = solve(&graph).unwrap();
        let err = Comparison::evaluate(&graph, &exact, &approx("101", 2.0)).unwrap_err();
        assert!(matches!(
            err,
            EvalError::AssignmentMismatch {
                expected: 4,
                got: 3
            }
        ));
    }
}

//! Comparison report structure.
//!
//! The export envelope bundling one exact-vs-approximate comparison
//! with enough metadata to identify the run later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use skera_graph::Graph;
use skera_solve::ExactSolution;

use crate::approx::ApproxSolution;
use crate::comparison::Comparison;

/// Current report schema version.
pub const SCHEMA_VERSION: &str = "1.0";

/// Summary of the graph a comparison ran on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Number of vertices.
    pub n_vertices: u32,
    /// Number of edges.
    pub num_edges: usize,
    /// Largest cut any assignment could reach.
    pub cut_upper_bound: u32,
}

impl From<&Graph> for GraphSummary {
    fn from(graph: &Graph) -> Self {
        Self {
            n_vertices: graph.n_vertices(),
            num_edges: graph.num_edges(),
            cut_upper_bound: graph.cut_upper_bound(),
        }
    }
}

/// Complete comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareReport {
    /// Schema version for forward compatibility.
    pub schema_version: String,
    /// Identifier for this run.
    pub run_id: Uuid,
    /// When the comparison ran.
    pub timestamp: DateTime<Utc>,
    /// The graph both results were computed over.
    pub graph: GraphSummary,
    /// The exhaustive solver's result.
    pub exact: ExactSolution,
    /// The external routine's record.
    pub approx: ApproxSolution,
    /// The comparison itself.
    pub comparison: Comparison,
}

impl CompareReport {
    /// Assemble a report with a fresh run id and the current time.
    pub fn new(
        graph: &Graph,
        exact: ExactSolution,
        approx: ApproxSolution,
        comparison: Comparison,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            graph: GraphSummary::from(graph),
            exact,
            approx,
            comparison,
        }
    }
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Max-Cut comparison on {} vertices, {} edges",
            self.graph.n_vertices, self.graph.num_edges
        )?;
        writeln!(
            f,
            "  exact optimum:     {} (assignment {})",
            self.exact.cut_value, self.exact.assignment
        )?;
        writeln!(
            f,
            "  {} candidate:    {} (assignment {}, claimed {})",
            self.approx.solver,
            self.comparison.approx_cut_value,
            self.approx.assignment,
            self.comparison.claimed_objective
        )?;
        writeln!(
            f,
            "  approximation:     {:.1}% of optimal, gap {}",
            self.comparison.approximation_ratio * 100.0,
            self.comparison.absolute_gap
        )?;
        if !self.comparison.matches_claim {
            writeln!(
                f,
                "  warning: claimed objective disagrees with the recomputed cut"
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skera_graph::generators;
    use skera_solve::solve;

    fn sample_report() -> CompareReport {
        let graph = generators::diamond_4();
        let exact = solve(&graph).unwrap();
        let approx = ApproxSolution {
            solver: "qaoa".to_string(),
            assignment: "1000".parse().unwrap(),
            objective: 3.0,
            iterations: Some(50),
            evaluations: None,
        };
        let comparison = Comparison::evaluate(&graph, &exact, &approx).unwrap();
        CompareReport::new(&graph, exact, approx, comparison)
    }

    #[test]
    fn test_report_metadata() {
        let report = sample_report();
        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.graph.n_vertices, 4);
        assert_eq!(report.graph.num_edges, 5);
        // Two reports never share a run id.
        assert_ne!(report.run_id, sample_report().run_id);
    }

    #[test]
    fn test_report_display() {
        let text = format!("{}", sample_report());
        assert!(text.contains("exact optimum:     4"));
        assert!(text.contains("qaoa candidate:    3"));
        assert!(text.contains("75.0% of optimal"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_report_display_flags_bad_claim() {
        let graph = generators::diamond_4();
        let exact = solve(&graph).unwrap();
        let approx = ApproxSolution {
            solver: "qaoa".to_string(),
            assignment: "1000".parse().unwrap(),
            objective: 4.0,
            iterations: None,
            evaluations: None,
        };
        let comparison = Comparison::evaluate(&graph, &exact, &approx).unwrap();
        let report = CompareReport::new(&graph, exact, approx, comparison);
        assert!(format!("{report}").contains("warning"));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: CompareReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

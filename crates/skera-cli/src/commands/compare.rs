//! Compare command implementation.
//!
//! Solves the graph exactly, loads an external result, and prints how
//! the candidate measures up.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use skera_eval::{export, ApproxSolution, CompareReport, Comparison, ExportConfig};
use skera_solve::solve;

use super::common::load_graph;

/// Execute the compare command.
pub fn execute(graph_spec: &str, approx_path: &str, export_path: Option<&str>) -> Result<()> {
    let graph = load_graph(graph_spec)?;

    let approx = ApproxSolution::from_file(Path::new(approx_path))
        .with_context(|| format!("Failed to load approximate result: {approx_path}"))?;

    let exact = solve(&graph)?;
    let comparison = Comparison::evaluate(&graph, &exact, &approx)?;
    let report = CompareReport::new(&graph, exact, approx, comparison);

    print!("{report}");
    if report.comparison.is_optimal {
        println!("{} Candidate is optimal", style("✓").green().bold());
    }

    if let Some(path) = export_path {
        export::to_file(&report, Path::new(path), &ExportConfig::default())
            .with_context(|| format!("Failed to export report: {path}"))?;
        println!("Wrote {path}");
    }

    Ok(())
}

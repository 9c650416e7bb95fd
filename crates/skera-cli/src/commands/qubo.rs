//! Qubo command implementation.
//!
//! Emits the Max-Cut formulation of a graph as LP text or JSON.

use anyhow::Result;

use skera_qubo::{maxcut_program, to_lp_string};

use super::common::{load_graph, write_or_print};

/// Execute the qubo command.
pub fn execute(graph_spec: &str, sense: &str, format: &str, output: Option<&str>) -> Result<()> {
    let graph = load_graph(graph_spec)?;
    let program = maxcut_program(&graph);

    let program = match sense.to_lowercase().as_str() {
        "maximize" | "max" => program,
        "minimize" | "min" => program.to_minimization(),
        other => anyhow::bail!("Unknown sense: '{other}'. Available: maximize, minimize"),
    };

    let text = match format {
        "json" => serde_json::to_string_pretty(&program)? + "\n",
        "lp" => to_lp_string(&program),
        other => anyhow::bail!("Unknown format: '{other}'. Available: lp, json"),
    };

    write_or_print(&text, output)
}

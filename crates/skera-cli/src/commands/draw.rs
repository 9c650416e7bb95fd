//! Draw command implementation.
//!
//! Emits DOT text; rendering is left to Graphviz or any DOT viewer.

use anyhow::Result;

use skera_graph::dot::to_dot;

use super::common::{load_graph, write_or_print};

/// Execute the draw command.
pub fn execute(graph_spec: &str, output: Option<&str>) -> Result<()> {
    let graph = load_graph(graph_spec)?;
    write_or_print(&to_dot(&graph), output)
}

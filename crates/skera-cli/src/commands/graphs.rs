//! Graphs command implementation.

use anyhow::Result;
use console::style;

use skera_graph::generators;

/// Execute the graphs command.
pub fn execute() -> Result<()> {
    println!("{} Built-in graphs:\n", style("Skera").cyan().bold());

    for (name, graph) in generators::catalog() {
        println!("  {} {}", style("●").green(), style(name).bold());
        println!("    Vertices: {}", graph.n_vertices());
        println!("    Edges:    {}", graph.num_edges());
        println!("    Max possible cut: {}", graph.cut_upper_bound());
        println!();
    }

    println!("Custom graphs: pass a JSON file with {{ \"n_vertices\": N, \"edges\": [[u, v], ...] }}");

    Ok(())
}

//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use skera_graph::{generators, Graph};

/// Load a graph from a built-in name or a JSON file path.
///
/// Built-in names win over files, so `skera solve -g diamond4` never
/// touches the filesystem.
pub fn load_graph(spec: &str) -> Result<Graph> {
    if let Some(graph) = generators::named(spec) {
        return Ok(graph);
    }

    let path = Path::new(spec);
    if !path.exists() {
        anyhow::bail!(
            "Unknown graph: '{spec}'. Available built-ins: {}, or pass a JSON file path",
            generators::NAMES.join(", ")
        );
    }

    let json = fs::read_to_string(path).with_context(|| format!("Failed to read file: {spec}"))?;
    Graph::from_json(&json).with_context(|| format!("Invalid graph file: {spec}"))
}

/// Write text to a file, or print it when no path was given.
pub fn write_or_print(text: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write file: {path}"))?;
            println!("Wrote {path}");
        }
        None => print!("{text}"),
    }
    Ok(())
}

//! Built-in graph instances.
//!
//! Small named graphs for demos and tests, plus parameterized families.
//! All generators are deterministic; [`random`] takes an explicit seed.

use crate::graph::Graph;
use crate::vertex::Edge;

/// Names accepted by [`named`], in listing order.
pub const NAMES: &[&str] = &["diamond4", "square4", "complete4", "ring6"];

/// Look up a built-in graph by name.
///
/// Accepts the names in [`NAMES`] plus a few aliases (`diamond`,
/// `square`, `k4`, `ring`). Matching is case-insensitive.
pub fn named(name: &str) -> Option<Graph> {
    match name.to_lowercase().as_str() {
        "diamond4" | "diamond" => Some(diamond_4()),
        "square4" | "square" => Some(square_4()),
        "complete4" | "k4" => Some(complete_4()),
        "ring6" | "ring" => Some(ring_6()),
        _ => None,
    }
}

/// Every built-in graph with its canonical name.
pub fn catalog() -> Vec<(&'static str, Graph)> {
    vec![
        ("diamond4", diamond_4()),
        ("square4", square_4()),
        ("complete4", complete_4()),
        ("ring6", ring_6()),
    ]
}

/// 4-vertex cycle with one diagonal (the diamond graph).
///
/// ```text
/// 0 --- 1
/// |  \  |
/// 3 --- 2
/// ```
///
/// The maximum cut is 4, reached by separating {0, 2} from {1, 3}: all
/// four cycle edges cross, the diagonal cannot.
pub fn diamond_4() -> Graph {
    build(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])
}

/// 4-vertex square (cycle without the diagonal).
///
/// ```text
/// 0 --- 1
/// |     |
/// 3 --- 2
/// ```
pub fn square_4() -> Graph {
    build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
}

/// Complete graph K4.
pub fn complete_4() -> Graph {
    build(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
}

/// 6-vertex ring.
pub fn ring_6() -> Graph {
    build(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])
}

/// Path on `n` vertices (`n − 1` edges).
pub fn path(n: u32) -> Graph {
    let edges: Vec<Edge> = (1..n).map(|i| Edge::new(i - 1, i)).collect();
    Graph::from_parts(n, edges)
}

/// Star with vertex 0 at the center and `n − 1` spokes.
pub fn star(n: u32) -> Graph {
    let edges: Vec<Edge> = (1..n).map(|i| Edge::new(0u32, i)).collect();
    Graph::from_parts(n, edges)
}

/// Random graph where each vertex pair is an edge with probability
/// `edge_probability`.
///
/// Uses a small LCG so the same seed always produces the same graph.
pub fn random(n: u32, edge_probability: f64, seed: u64) -> Graph {
    let mut state = seed;
    let mut rand = || {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        ((state >> 16) & 0x7fff) as f64 / 32768.0
    };

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rand() < edge_probability {
                edges.push(Edge::new(i, j));
            }
        }
    }

    Graph::from_parts(n, edges)
}

fn build(n: u32, pairs: &[(u32, u32)]) -> Graph {
    let edges = pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect();
    Graph::from_parts(n, edges)
}

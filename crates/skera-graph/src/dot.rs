//! Graphviz DOT export.
//!
//! Drawing is delegated to external tooling (`dot -Tsvg`, editors, web
//! viewers); this module only emits the textual graph description.

use petgraph::dot::{Config, Dot};
use petgraph::graph::UnGraph;

use crate::graph::Graph;

/// Bridge a [`Graph`] into a petgraph undirected graph.
///
/// Node weights are the vertex indices, so renderers label nodes the
/// same way the rest of the toolkit does.
pub fn to_petgraph(graph: &Graph) -> UnGraph<u32, ()> {
    let mut g = UnGraph::with_capacity(graph.n_vertices() as usize, graph.num_edges());
    let nodes: Vec<_> = (0..graph.n_vertices()).map(|i| g.add_node(i)).collect();
    for edge in graph.edges() {
        g.add_edge(nodes[edge.u.0 as usize], nodes[edge.v.0 as usize], ());
    }
    g
}

/// Render a [`Graph`] as Graphviz DOT text.
pub fn to_dot(graph: &Graph) -> String {
    let g = to_petgraph(graph);
    format!("{:?}", Dot::with_config(&g, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    #[test]
    fn test_petgraph_bridge() {
        let g = to_petgraph(&generators::diamond_4());
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_dot_output_shape() {
        let dot = to_dot(&generators::square_4());
        assert!(dot.starts_with("graph {"));
        assert_eq!(dot.matches("--").count(), 4);
    }

    #[test]
    fn test_dot_isolated_vertices_present() {
        let g = crate::Graph::new(3, &[]).unwrap();
        let dot = to_dot(&g);
        for label in ["0", "1", "2"] {
            assert!(dot.contains(label));
        }
    }
}

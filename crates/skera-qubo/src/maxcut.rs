//! The Max-Cut objective as a quadratic binary program.

use skera_graph::Graph;

use crate::program::QuadraticProgram;

/// Formulate the Max-Cut objective over a graph.
///
/// One binary variable `x{i}` per vertex; each non-loop edge `(u, v)`
/// contributes `x_u + x_v − 2·x_u·x_v`, which is 1 exactly when the
/// endpoints take different values. The program therefore evaluates to
/// the cut value at every 0/1 point, and maximizing it is the Max-Cut
/// problem. Self-loops contribute no term, matching their zero cut
/// contribution.
pub fn maxcut_program(graph: &Graph) -> QuadraticProgram {
    let mut program = QuadraticProgram::new("maxcut");

    for i in 0..graph.n_vertices() {
        // Variable names are fixed by construction, so this cannot collide.
        program
            .binary_var(format!("x{i}"))
            .expect("vertex variable names are unique");
    }

    for edge in graph.edges() {
        if edge.is_loop() {
            continue;
        }
        let (u, v) = (edge.u.0 as usize, edge.v.0 as usize);
        program.add_linear(u, 1.0).expect("endpoint validated");
        program.add_linear(v, 1.0).expect("endpoint validated");
        program.add_quadratic(u, v, -2.0).expect("endpoint validated");
    }

    program
}

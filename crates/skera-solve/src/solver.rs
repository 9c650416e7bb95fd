//! The exhaustive sweep.
//!
//! Candidates are enumerated as lexicographic bit tuples with vertex 0
//! most significant, the order a Cartesian product of {0, 1} repeated
//! `n` times produces. The best candidate is tracked with a strict `>`
//! comparison, so ties always keep the earliest-enumerated assignment.
//! Both rules are load-bearing: they decide which of several optimal
//! partitions gets reported.

use serde::{Deserialize, Serialize};
use tracing::debug;

use skera_graph::{Assignment, Graph};

use crate::error::{SolveError, SolveResult};

/// Largest vertex count the exhaustive sweep accepts.
///
/// 2^20 candidates is the point past which the sweep stops being an
/// interactive baseline; larger graphs are rejected up front.
pub const MAX_BRUTE_FORCE_VERTICES: u32 = 20;

/// How many candidates are scored between observer callbacks.
const OBSERVE_INTERVAL: u64 = 1 << 12;

/// The exact optimum found by the exhaustive sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactSolution {
    /// The first-enumerated assignment reaching the maximum cut.
    pub assignment: Assignment,
    /// The maximum cut value. Exact, not approximate.
    pub cut_value: u32,
    /// Number of candidates scored; always `2^n`.
    pub candidates_evaluated: u64,
}

/// Find the maximum cut of a graph by exhaustive enumeration.
///
/// Pure and deterministic: the same graph always yields the same
/// solution. The degenerate cases fall out of the sweep itself — a
/// graph with no vertices has exactly one (empty) candidate and cut 0,
/// and a graph with no edges keeps the all-zero assignment scored
/// first.
///
/// Fails with [`SolveError::GraphTooLarge`] above
/// [`MAX_BRUTE_FORCE_VERTICES`] vertices.
pub fn solve(graph: &Graph) -> SolveResult<ExactSolution> {
    solve_with_observer(graph, &mut |_, _| {})
}

/// Exhaustive solve with periodic progress callbacks.
///
/// `observer` receives `(candidates_scored, total_candidates)` every
/// few thousand candidates and once after the final one; it exists so
/// callers can drive a progress bar without the solver knowing about
/// terminals.
pub fn solve_with_observer(
    graph: &Graph,
    observer: &mut dyn FnMut(u64, u64),
) -> SolveResult<ExactSolution> {
    let n = graph.n_vertices();
    if n > MAX_BRUTE_FORCE_VERTICES {
        return Err(SolveError::GraphTooLarge {
            n_vertices: n,
            max: MAX_BRUTE_FORCE_VERTICES,
        });
    }

    let total = 1u64 << n;
    let mut best_rank = 0u64;
    let mut best_value = score(graph, n, 0);

    for rank in 1..total {
        let value = score(graph, n, rank);
        // Strict comparison: ties keep the earliest-enumerated candidate.
        if value > best_value {
            best_value = value;
            best_rank = rank;
        }
        if rank % OBSERVE_INTERVAL == 0 {
            observer(rank, total);
        }
    }
    observer(total, total);

    debug!(
        n_vertices = n,
        candidates = total,
        cut_value = best_value,
        "exhaustive sweep complete"
    );

    Ok(ExactSolution {
        assignment: Assignment::from_lex_rank(n, best_rank),
        cut_value: best_value,
        candidates_evaluated: total,
    })
}

/// Cut value of the candidate at `rank`, read positionally off the
/// counter so no per-candidate allocation happens.
///
/// Vertex `i` carries bit `n − 1 − i` of the rank.
fn score(graph: &Graph, n: u32, rank: u64) -> u32 {
    graph
        .edges()
        .iter()
        .filter(|e| {
            let bit_u = (rank >> (n - 1 - e.u.0)) & 1;
            let bit_v = (rank >> (n - 1 - e.v.0)) & 1;
            bit_u != bit_v
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use skera_graph::generators;

    #[test]
    fn test_empty_graph() {
        let solution = solve(&Graph::new(0, &[]).unwrap()).unwrap();
        assert_eq!(solution.cut_value, 0);
        assert!(solution.assignment.is_empty());
        assert_eq!(solution.candidates_evaluated, 1);
    }

    #[test]
    fn test_no_edges_keeps_all_zero() {
        let solution = solve(&Graph::new(5, &[]).unwrap()).unwrap();
        assert_eq!(solution.cut_value, 0);
        assert_eq!(format!("{}", solution.assignment), "00000");
        assert_eq!(solution.candidates_evaluated, 32);
    }

    #[test]
    fn test_single_edge_tie_break() {
        // Both 01 and 10 cut the edge; 01 is enumerated first.
        let solution = solve(&Graph::new(2, &[(0, 1)]).unwrap()).unwrap();
        assert_eq!(solution.cut_value, 1);
        assert_eq!(format!("{}", solution.assignment), "01");
    }

    #[test]
    fn test_diamond_graph() {
        // The 4-cycle with diagonal (0, 2): separating {0, 2} from
        // {1, 3} cuts all four cycle edges, and the diagonal cannot be
        // cut in that partition.
        let solution = solve(&generators::diamond_4()).unwrap();
        assert_eq!(solution.cut_value, 4);
        assert_eq!(format!("{}", solution.assignment), "0101");
        assert_eq!(solution.candidates_evaluated, 16);
    }

    #[test]
    fn test_square_fully_cut() {
        let solution = solve(&generators::square_4()).unwrap();
        assert_eq!(solution.cut_value, 4);
        assert_eq!(format!("{}", solution.assignment), "0101");
    }

    #[test]
    fn test_complete_4() {
        // K4: best split is 2|2, cutting 4 of the 6 edges.
        let solution = solve(&generators::complete_4()).unwrap();
        assert_eq!(solution.cut_value, 4);
    }

    #[test]
    fn test_even_ring_is_bipartite() {
        let graph = generators::ring_6();
        let solution = solve(&graph).unwrap();
        assert_eq!(solution.cut_value, graph.cut_upper_bound());
        assert_eq!(format!("{}", solution.assignment), "010101");
    }

    #[test]
    fn test_odd_ring_loses_one_edge() {
        let graph = Graph::new(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        assert_eq!(solve(&graph).unwrap().cut_value, 4);
    }

    #[test]
    fn test_disconnected_components() {
        // Two disjoint edges: both can be cut independently.
        let graph = Graph::new(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(solve(&graph).unwrap().cut_value, 2);
    }

    #[test]
    fn test_self_loop_ignored() {
        let graph = Graph::new(2, &[(0, 0), (0, 1)]).unwrap();
        assert_eq!(solve(&graph).unwrap().cut_value, 1);
    }

    #[test]
    fn test_idempotent() {
        let graph = generators::diamond_4();
        assert_eq!(solve(&graph).unwrap(), solve(&graph).unwrap());
    }

    #[test]
    fn test_solution_matches_cut_value_recomputation() {
        let graph = generators::random(9, 0.4, 7);
        let solution = solve(&graph).unwrap();
        assert_eq!(
            graph.cut_value(&solution.assignment).unwrap(),
            solution.cut_value
        );
    }

    #[test]
    fn test_too_large_rejected() {
        let graph = generators::path(MAX_BRUTE_FORCE_VERTICES + 1);
        let err = solve(&graph).unwrap_err();
        assert!(matches!(
            err,
            SolveError::GraphTooLarge { n_vertices: 21, max: 20 }
        ));
    }

    #[test]
    fn test_observer_sees_completion() {
        let mut calls = Vec::new();
        let graph = generators::diamond_4();
        solve_with_observer(&graph, &mut |done, total| calls.push((done, total))).unwrap();
        assert_eq!(calls.last(), Some(&(16, 16)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let solution = solve(&generators::diamond_4()).unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        let back: ExactSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
    }
}

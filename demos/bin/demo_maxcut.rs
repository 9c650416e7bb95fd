//! Max-Cut Baseline Demo
//!
//! Walks the full workflow on a small graph: problem definition, QUBO
//! formulation, the external-optimizer boundary, the exact brute-force
//! sweep, and the final comparison.

use std::path::Path;

use clap::Parser;

use skera_demos::{
    create_progress_bar, print_header, print_info, print_result, print_section, print_success,
};
use skera_eval::{ApproxSolution, CompareReport, Comparison};
use skera_graph::{dot, generators};
use skera_qubo::{maxcut_program, to_lp_string};
use skera_solve::solve_with_observer;

#[derive(Parser, Debug)]
#[command(name = "demo-maxcut")]
#[command(about = "Demonstrate the exact Max-Cut baseline workflow")]
struct Args {
    /// Graph to solve (diamond4, square4, complete4, ring6)
    #[arg(short, long, default_value = "diamond4")]
    graph: String,

    /// JSON file with an external solver's result to compare against
    #[arg(short, long)]
    approx: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_target(false)
        .init();

    print_header("Max-Cut Exact Baseline Demo");

    // Step 1: define the graph.
    let Some(graph) = generators::named(&args.graph) else {
        anyhow::bail!(
            "Unknown graph: {}. Available: {}",
            args.graph,
            generators::NAMES.join(", ")
        );
    };

    print_section("Problem Setup");
    println!("{graph}");
    print_result("Vertices", graph.n_vertices());
    print_result("Edges", graph.num_edges());
    print_result("Max possible cut", graph.cut_upper_bound());

    // Step 2: show it. Rendering is external; we emit DOT.
    print_section("Graph Drawing");
    println!("{}", dot::to_dot(&graph));
    print_info("Pipe this through `dot -Tsvg` to render the graph.");

    // Step 3: formulate the QUBO.
    print_section("QUBO Formulation");
    let program = maxcut_program(&graph);
    println!("{}", to_lp_string(&program));
    println!("  The objective value at any 0/1 point is the cut value of");
    println!("  that partition, so an external optimizer's objective is");
    println!("  directly comparable with the exact baseline below.");

    // Step 4: the external-optimizer boundary.
    print_section("External Optimizer");
    let approx = match &args.approx {
        Some(path) => {
            let record = ApproxSolution::from_file(Path::new(path))?;
            print_result("Solver", &record.solver);
            print_result("Assignment", &record.assignment);
            print_result("Claimed objective", record.objective);
            Some(record)
        }
        None => {
            println!("  A variational solver (QAOA, annealing, ...) would take the");
            println!("  QUBO above and return a candidate assignment. Supply one");
            println!("  with --approx result.json to close the loop:");
            println!();
            println!("    {{ \"solver\": \"qaoa\", \"assignment\": [0, 1, 0, 1], \"objective\": 4.0 }}");
            None
        }
    };

    // Step 5: the exact sweep.
    print_section("Exact Brute-Force Baseline");
    let pb = create_progress_bar(1u64 << graph.n_vertices(), "Enumerating...");
    let exact = solve_with_observer(&graph, &mut |done, _| pb.set_position(done))?;
    pb.finish_and_clear();

    let (side0, side1) = exact.assignment.partition_sets();
    print_result("Maximum cut (exact)", exact.cut_value);
    print_result("Assignment", &exact.assignment);
    print_result("Partition", format!("{side0:?} | {side1:?}"));
    print_result("Candidates enumerated", exact.candidates_evaluated);

    // Step 6: compare.
    print_section("Comparison");
    match approx {
        Some(approx) => {
            let comparison = Comparison::evaluate(&graph, &exact, &approx)?;
            let report = CompareReport::new(&graph, exact, approx, comparison);
            print!("{report}");
            println!();
            if report.comparison.is_optimal {
                print_success("The external candidate found the true optimum!");
            } else {
                println!(
                    "  The candidate reached {:.1}% of the optimum.",
                    report.comparison.approximation_ratio * 100.0
                );
            }
        }
        None => {
            print_info("No external result supplied; the exact baseline stands alone.");
        }
    }

    println!();
    print_success("Max-Cut demo complete!");
    Ok(())
}

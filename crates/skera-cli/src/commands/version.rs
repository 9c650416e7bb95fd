//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - exact Max-Cut baselines and QUBO formulation tooling",
        style("Skera").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  skera-graph  Problem model: graphs, assignments, generators");
    println!("  skera-qubo   Quadratic binary program formulation");
    println!("  skera-solve  Exhaustive brute-force solver");
    println!("  skera-eval   Exact-vs-approximate comparison");
    println!("  skera-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/skera").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}

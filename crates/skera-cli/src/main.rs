//! Skera Command-Line Interface
//!
//! The main entry point for the `skera` tool: exact Max-Cut baselines,
//! QUBO formulation export, and comparison against external optimizers.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{compare, draw, graphs, qubo, solve, version};

/// Skera - exact Max-Cut baselines and QUBO formulation tooling
#[derive(Parser)]
#[command(name = "skera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a graph exactly by exhaustive enumeration
    Solve {
        /// Graph: a built-in name or a JSON file path
        #[arg(short, long)]
        graph: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Show a progress bar during the sweep
        #[arg(long)]
        progress: bool,
    },

    /// Emit the Max-Cut QUBO formulation of a graph
    Qubo {
        /// Graph: a built-in name or a JSON file path
        #[arg(short, long)]
        graph: String,

        /// Objective sense (maximize, minimize)
        #[arg(short, long, default_value = "maximize")]
        sense: String,

        /// Output format (lp, json)
        #[arg(short, long, default_value = "lp")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compare an external result against the exact optimum
    Compare {
        /// Graph: a built-in name or a JSON file path
        #[arg(short, long)]
        graph: String,

        /// JSON file with the external solver's result
        #[arg(short, long)]
        approx: String,

        /// Output file for the JSON report (printed report only if omitted)
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Emit a graph as Graphviz DOT text
    Draw {
        /// Graph: a built-in name or a JSON file path
        #[arg(short, long)]
        graph: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List built-in graphs
    Graphs,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Solve {
            graph,
            format,
            progress,
        } => solve::execute(&graph, &format, progress),

        Commands::Qubo {
            graph,
            sense,
            format,
            output,
        } => qubo::execute(&graph, &sense, &format, output.as_deref()),

        Commands::Compare {
            graph,
            approx,
            export,
        } => compare::execute(&graph, &approx, export.as_deref()),

        Commands::Draw { graph, output } => draw::execute(&graph, output.as_deref()),

        Commands::Graphs => graphs::execute(),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mf_app::{AppResult, SolveOptions, SolveResponse, network_service};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Maximum flow in networks with node and edge capacities", long_about = None)]
struct Cli {
    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the maximum flow of a network file
    Solve {
        /// Path to the network file (.json, .yaml or .yml)
        network_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// List edges that carry no flow as well
        #[arg(long)]
        all_edges: bool,
        /// Report per-stage timings
        #[arg(long)]
        timing: bool,
    },
    /// Check that a network file parses and is consistent
    Validate {
        /// Path to the network file
        network_path: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Solve {
            network_path,
            format,
            all_edges,
            timing,
        } => cmd_solve(&network_path, format, all_edges, timing),
        Commands::Validate { network_path } => cmd_validate(&network_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let def = network_service::load_network(network_path)?;
    let summary = network_service::summarize(&def);
    println!(
        "✓ Network is valid ({} nodes, {} edges, {} -> {})",
        summary.node_count, summary.edge_count, summary.source, summary.sink
    );
    for label in &summary.duplicate_edges {
        println!("  ! edge {label} is listed more than once; the last capacity wins");
    }
    for label in &summary.self_loops {
        println!("  ! edge {label} is a self loop; its flow reads as the negated node flow");
    }
    Ok(())
}

fn cmd_solve(
    network_path: &Path,
    format: OutputFormat,
    all_edges: bool,
    timing: bool,
) -> AppResult<()> {
    let options = SolveOptions {
        include_idle_edges: all_edges,
        include_timing: timing,
    };

    if format == OutputFormat::Text {
        println!("Loading network from '{}'...", network_path.display());
    }
    let response = network_service::solve_file(network_path, options)?;

    match format {
        OutputFormat::Text => print_text(&response, timing),
        OutputFormat::Json => println!("{}", response.report.to_json_string()?),
        OutputFormat::Yaml => print!("{}", response.report.to_yaml_string()?),
    }
    Ok(())
}

fn print_text(response: &SolveResponse, timing: bool) {
    let report = &response.report;

    println!("\nTOTAL MAXIMUM FLOW: {}", report.total_flow);

    println!("\nFlow through NODES:");
    for (name, usage) in &report.nodes {
        println!("  - Node {}: {} / {}", name, usage.flow_used, usage.capacity);
    }

    println!("\nFlow through EDGES:");
    if report.edges.is_empty() {
        println!("  (none)");
    }
    for (label, usage) in &report.edges {
        println!("  - Edge {}: {} / {}", label, usage.flow_used, usage.capacity);
    }

    if timing {
        println!("\nAugmenting paths:  {}", response.solution.augmentations);
        println!("{}", response.solution.timing.summary());
    }
}

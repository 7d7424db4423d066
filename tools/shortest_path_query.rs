use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_bellman_ford::config::{init_logging, LoggingConfig};
use rust_bellman_ford::{
    import_edges, query, IndexedGraph, ImportOptions, RelaxationOptions, RoundLimit, ShortestPathOutcome,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoundLimitArg {
    EdgeCount,
    VertexCount,
}

impl From<RoundLimitArg> for RoundLimit {
    fn from(arg: RoundLimitArg) -> Self {
        match arg {
            RoundLimitArg::EdgeCount => RoundLimit::EdgeCount,
            RoundLimitArg::VertexCount => RoundLimit::VertexCount,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "shortest-path-query")]
#[command(about = "Shortest-path distance with negative-cycle detection over an edge list file", long_about = None)]
struct Args {
    /// Edge list file (.csv or .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Source vertex
    #[arg(short, long)]
    source: String,

    /// Destination vertex
    #[arg(short, long)]
    destination: String,

    /// Bound on the number of relaxation rounds
    #[arg(long, value_enum, default_value = "edge-count")]
    round_limit: RoundLimitArg,

    /// Run every round even after distances stop changing
    #[arg(long)]
    no_early_exit: bool,

    /// Skip malformed rows in the input instead of failing
    #[arg(long)]
    skip_errors: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LoggingConfig::from_env()).context("Failed to initialise logging")?;

    let import_options = ImportOptions {
        skip_errors: args.skip_errors,
        ..Default::default()
    };
    let imported = import_edges(&args.input, &import_options)
        .with_context(|| format!("Failed to import edge list {}", args.input.display()))?;

    let graph = IndexedGraph::from_edges(imported.edges);
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph indexed"
    );

    let options = RelaxationOptions {
        round_limit: args.round_limit.into(),
        stop_on_convergence: !args.no_early_exit,
    };
    let outcome: ShortestPathOutcome<f64> = query(&graph, &args.source, &args.destination, &options)?;

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{} -> {}: {}", args.source, args.destination, outcome);
    }

    Ok(())
}

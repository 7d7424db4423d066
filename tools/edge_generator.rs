use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_bellman_ford::config::{init_logging, LoggingConfig};
use rust_bellman_ford::{export_edges, EdgeListFormat, ExportOptions, WeightedEdge};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
enum GraphType {
    /// Random tail/head pairs
    Uniform,
    /// Edges only point from lower to higher vertex numbers, never a cycle
    Layered,
    /// A cycle through every vertex plus random chords
    Ring,
}

#[derive(Parser, Debug)]
#[command(name = "edge-generator")]
#[command(about = "Generate weighted directed edge lists for benchmarking", long_about = None)]
struct Args {
    /// Type of graph to generate
    #[arg(short, long, value_enum)]
    graph_type: GraphType,

    /// Number of vertices
    #[arg(short = 'n', long, default_value_t = 1000)]
    vertices: usize,

    /// Average out-degree
    #[arg(short = 'd', long, default_value_t = 4)]
    avg_degree: usize,

    /// Smallest edge weight
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    min_weight: i64,

    /// Largest edge weight
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    max_weight: i64,

    /// Add a cycle with negative total weight reachable from vertex 0
    #[arg(long)]
    negative_cycle: bool,

    /// Output file (.csv or .json)
    #[arg(short, long)]
    output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct EdgeGenerator {
    rng: StdRng,
    min_weight: i64,
    max_weight: i64,
}

impl EdgeGenerator {
    fn new(seed: u64, min_weight: i64, max_weight: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_weight,
            max_weight,
        }
    }

    fn weight(&mut self) -> i64 {
        self.rng.gen_range(self.min_weight..=self.max_weight)
    }

    fn edge(&mut self, tail: usize, head: usize) -> WeightedEdge<usize, i64> {
        let weight = self.weight();
        WeightedEdge::new(tail, head, weight)
    }

    fn generate_uniform(&mut self, n: usize, avg_degree: usize) -> Vec<WeightedEdge<usize, i64>> {
        tracing::info!(vertices = n, avg_degree, "generating uniform random graph");

        let mut edges = Vec::with_capacity(n * avg_degree);
        while edges.len() < n * avg_degree {
            let tail = self.rng.gen_range(0..n);
            let head = self.rng.gen_range(0..n);
            if tail != head {
                edges.push(self.edge(tail, head));
            }
        }
        edges
    }

    fn generate_layered(&mut self, n: usize, avg_degree: usize) -> Vec<WeightedEdge<usize, i64>> {
        tracing::info!(vertices = n, avg_degree, "generating layered acyclic graph");

        let mut edges = Vec::with_capacity(n * avg_degree);
        // Spine keeps every vertex reachable from 0
        for tail in 0..n - 1 {
            edges.push(self.edge(tail, tail + 1));
        }
        while edges.len() < n * avg_degree {
            let a = self.rng.gen_range(0..n);
            let b = self.rng.gen_range(0..n);
            if a != b {
                edges.push(self.edge(a.min(b), a.max(b)));
            }
        }
        edges
    }

    fn generate_ring(&mut self, n: usize, avg_degree: usize) -> Vec<WeightedEdge<usize, i64>> {
        tracing::info!(vertices = n, avg_degree, "generating ring graph");

        let mut edges: Vec<_> = (0..n).map(|tail| self.edge(tail, (tail + 1) % n)).collect();
        while edges.len() < n * avg_degree {
            let tail = self.rng.gen_range(0..n);
            let head = self.rng.gen_range(0..n);
            if tail != head {
                edges.push(self.edge(tail, head));
            }
        }
        edges
    }

    /// Close a cycle of unit-negative edges and link it to vertex 0
    fn inject_negative_cycle(&mut self, n: usize, edges: &mut Vec<WeightedEdge<usize, i64>>) {
        let len = n.min(4);
        let mut members: Vec<usize> = (0..n).collect();
        members.shuffle(&mut self.rng);
        members.truncate(len);

        tracing::info!(?members, "injecting negative cycle");

        if members[0] != 0 {
            edges.push(WeightedEdge::new(0, members[0], 1));
        }
        for (i, &tail) in members.iter().enumerate() {
            let head = members[(i + 1) % len];
            edges.push(WeightedEdge::new(tail, head, -1));
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LoggingConfig::from_env()).context("Failed to initialise logging")?;

    if args.vertices < 2 {
        bail!("need at least 2 vertices, got {}", args.vertices);
    }
    if args.min_weight > args.max_weight {
        bail!(
            "min weight {} is larger than max weight {}",
            args.min_weight,
            args.max_weight
        );
    }

    let format = EdgeListFormat::from_path(&args.output)?;
    let mut generator = EdgeGenerator::new(args.seed, args.min_weight, args.max_weight);

    let mut edges = match args.graph_type {
        GraphType::Uniform => generator.generate_uniform(args.vertices, args.avg_degree),
        GraphType::Layered => generator.generate_layered(args.vertices, args.avg_degree),
        GraphType::Ring => generator.generate_ring(args.vertices, args.avg_degree),
    };

    if args.negative_cycle {
        generator.inject_negative_cycle(args.vertices, &mut edges);
    }

    let count = export_edges(&edges, &args.output, format, &ExportOptions::default())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Edge list generation complete!");
    println!("Output file: {:?}", args.output);
    println!("  - Vertices: {}", args.vertices);
    println!("  - Edges: {}", count);

    Ok(())
}

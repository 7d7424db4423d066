/// Rust Bellman-Ford
///
/// Shortest-path distances in weighted directed graphs that may contain
/// negative edge weights, with detection of negative cycles reachable from
/// the source.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Rust Bellman-Ford                      │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Edge list (tools: CSV/JSON)  │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph Indexer                │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Relaxation Engine            │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │   Distance | Unreachable | NegativeCycleDetected  │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (WeightedEdge, Weight, Distance)
/// - `graph`: Adjacency index built from an edge list
/// - `algorithms`: Bellman-Ford relaxation and the shortest-path query
/// - `tools`: Edge list import and export
/// - `config`: Logging configuration for the binaries
///
/// # Example
///
/// ```
/// use rust_bellman_ford::{shortest_path, ShortestPathOutcome};
///
/// let edges: Vec<(u32, u32, i64)> = vec![(1, 2, 2), (2, 3, -1), (1, 3, 4)];
/// let outcome = shortest_path(edges, &1, &3).unwrap();
/// assert_eq!(outcome, ShortestPathOutcome::Distance(1));
/// ```

pub mod types;
pub mod graph;
pub mod algorithms;
pub mod tools;
pub mod config;

// Re-export commonly used types
pub use types::{Distance, Weight, WeightedEdge};

// Re-export graph types
pub use graph::{Adjacent, AdjacencyRecord, IndexedGraph};

// Re-export algorithm types
pub use algorithms::{
    bellman_ford, query, shortest_path, shortest_path_with_options, AlgorithmError, AlgorithmResult,
    DistanceTable, RelaxationOptions, RelaxationOutcome, RoundLimit, ShortestPathOutcome, VertexRole,
};

// Re-export tool types
pub use tools::{
    export_edges, export_to_csv, export_to_json, import_edges, import_from_csv, import_from_json,
    EdgeListFormat, ExportOptions, ImportOptions, ImportStats, ImportedEdges, ToolError, ToolResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

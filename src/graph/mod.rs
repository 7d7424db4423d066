/// Graph indexing
///
/// Turns a flat list of weighted directed edges into an adjacency structure
/// keyed by vertex identifier. Each vertex keeps both its incoming edges
/// (read by the relaxation loop) and its outgoing edges.

pub mod adjacency;

pub use adjacency::{Adjacent, AdjacencyRecord, IndexedGraph};

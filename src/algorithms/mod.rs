/// Graph algorithms module
///
/// This module implements the Bellman-Ford relaxation engine on top of the
/// indexed graph.

pub mod bellman_ford;

pub use bellman_ford::{
    bellman_ford, query, shortest_path, shortest_path_with_options, DistanceTable, RelaxationOptions,
    RelaxationOutcome, RoundLimit, ShortestPathOutcome,
};

use std::fmt;
use thiserror::Error;

/// Which query endpoint an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    Source,
    Destination,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Source => write!(f, "source"),
            VertexRole::Destination => write!(f, "destination"),
        }
    }
}

/// Algorithm errors
///
/// All of these are raised before a classified outcome is produced; no
/// partial result accompanies them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("Unknown {role} vertex {vertex}: it appears in no edge")]
    UnknownVertex { role: VertexRole, vertex: String },

    #[error("Edge {tail} -> {head} has a non-finite weight")]
    NonFiniteWeight { tail: String, head: String },

    #[error("Distance overflowed the weight type in round {round}")]
    DistanceOverflow { round: usize },
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Adjacency index built from a flat edge list

use crate::types::{Weight, WeightedEdge};
use std::collections::HashMap;
use std::hash::Hash;

/// One end of an indexed edge: the neighbour's dense index and the weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent<W> {
    /// Dense index of the neighbouring vertex
    pub vertex: usize,
    /// Weight of the edge
    pub weight: W,
}

/// Per-vertex adjacency record
///
/// Both lists follow the order of the input edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyRecord<W> {
    /// Edges ending at this vertex, as (predecessor, weight)
    pub incoming: Vec<Adjacent<W>>,
    /// Edges starting at this vertex, as (successor, weight)
    pub outgoing: Vec<Adjacent<W>>,
}

impl<W> AdjacencyRecord<W> {
    fn new() -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
}

/// Directed weighted graph indexed by vertex identifier
///
/// Vertices receive dense indices in order of first appearance, the tail of
/// an edge before its head. Every vertex named by at least one edge has
/// exactly one adjacency record; no other vertex exists.
#[derive(Debug, Clone)]
pub struct IndexedGraph<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    records: Vec<AdjacencyRecord<W>>,
    edge_count: usize,
}

impl<V, W> IndexedGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Build the adjacency index from an ordered edge list
    ///
    /// Never fails. An empty edge list gives an empty graph.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<V, W>>,
    {
        let mut graph = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            records: Vec::new(),
            edge_count: 0,
        };

        for edge in edges {
            let WeightedEdge { tail, head, weight } = edge.into();
            let tail = graph.intern(tail);
            let head = graph.intern(head);

            graph.records[tail].outgoing.push(Adjacent {
                vertex: head,
                weight,
            });
            graph.records[head].incoming.push(Adjacent {
                vertex: tail,
                weight,
            });
            graph.edge_count += 1;
        }

        graph
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }

        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.records.push(AdjacencyRecord::new());
        idx
    }

    /// Number of distinct vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the input list, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Dense index of a vertex, `None` if it appears in no edge
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Vertex identifier behind a dense index
    pub fn vertex_at(&self, idx: usize) -> Option<&V> {
        self.vertices.get(idx)
    }

    /// Vertex identifiers in index order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Adjacency records in index order
    pub fn records(&self) -> &[AdjacencyRecord<W>] {
        &self.records
    }

    pub fn record(&self, vertex: &V) -> Option<&AdjacencyRecord<W>> {
        self.index_of(vertex).map(|idx| &self.records[idx])
    }

    /// Incoming edges of a vertex as (predecessor, weight)
    pub fn incoming(&self, vertex: &V) -> Option<impl Iterator<Item = (&V, W)> + '_> {
        self.record(vertex).map(|record| {
            record
                .incoming
                .iter()
                .map(|adj| (&self.vertices[adj.vertex], adj.weight))
        })
    }

    /// Outgoing edges of a vertex as (successor, weight)
    pub fn outgoing(&self, vertex: &V) -> Option<impl Iterator<Item = (&V, W)> + '_> {
        self.record(vertex).map(|record| {
            record
                .outgoing
                .iter()
                .map(|adj| (&self.vertices[adj.vertex], adj.weight))
        })
    }

    /// Edges in tail order, each vertex's outgoing list in input order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<&V, W>> + '_ {
        self.records.iter().enumerate().flat_map(move |(tail, record)| {
            record.outgoing.iter().map(move |adj| {
                WeightedEdge::new(&self.vertices[tail], &self.vertices[adj.vertex], adj.weight)
            })
        })
    }

    /// First edge whose weight is NaN or infinite
    pub fn find_non_finite_weight(&self) -> Option<WeightedEdge<&V, W>> {
        self.edges().find(|edge| !edge.weight.is_finite_weight())
    }
}

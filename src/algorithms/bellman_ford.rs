/// Bellman-Ford shortest paths
///
/// Dynamic-programming relaxation over an [`IndexedGraph`]. Round `k` holds,
/// for every vertex, the length of the shortest path from the source that
/// uses at most `k` edges. Only the previous and the current round are kept
/// alive. If the last two rounds still disagree after the round bound, a
/// negative cycle is reachable from the source.

use super::{AlgorithmError, AlgorithmResult, VertexRole};
use crate::graph::{AdjacencyRecord, IndexedGraph};
use crate::types::{Distance, Weight, WeightedEdge};
use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// Upper bound on the number of relaxation rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundLimit {
    /// One round per input edge, never fewer than one per vertex
    #[default]
    EdgeCount,
    /// One round per vertex
    VertexCount,
}

impl RoundLimit {
    /// Number of rounds to run on a graph
    ///
    /// Convergence is read off by comparing the last two rounds, which only
    /// works once `rounds - 1 >= |V| - 1`. The edge count is floored at the
    /// vertex count for that reason: a forest has fewer edges than vertices.
    pub fn rounds<V, W>(self, graph: &IndexedGraph<V, W>) -> usize
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        match self {
            RoundLimit::EdgeCount => graph.edge_count().max(graph.vertex_count()),
            RoundLimit::VertexCount => graph.vertex_count(),
        }
    }
}

/// Relaxation options
#[derive(Debug, Clone)]
pub struct RelaxationOptions {
    /// How many rounds to run at most
    pub round_limit: RoundLimit,
    /// Stop as soon as a round improves no vertex
    pub stop_on_convergence: bool,
}

impl Default for RelaxationOptions {
    fn default() -> Self {
        Self {
            round_limit: RoundLimit::EdgeCount,
            stop_on_convergence: true,
        }
    }
}

/// Converged single-source distances
#[derive(Debug, Clone)]
pub struct DistanceTable<'g, V, W> {
    graph: &'g IndexedGraph<V, W>,
    distances: Vec<Distance<W>>,
    rounds_run: usize,
}

impl<'g, V, W> DistanceTable<'g, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Distance to a vertex, `None` if the vertex is not in the graph
    pub fn distance(&self, vertex: &V) -> Option<Distance<W>> {
        self.graph.index_of(vertex).map(|idx| self.distances[idx])
    }

    /// All vertices with their distances, in index order
    pub fn iter(&self) -> impl Iterator<Item = (&'g V, Distance<W>)> + '_ {
        self.graph.vertices().zip(self.distances.iter().copied())
    }

    /// Number of rounds actually run before the result was settled
    pub fn rounds_run(&self) -> usize {
        self.rounds_run
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Result of running the relaxation engine from one source
#[derive(Debug, Clone)]
pub enum RelaxationOutcome<'g, V, W> {
    /// Distances stabilised
    Converged(DistanceTable<'g, V, W>),
    /// A negative cycle is reachable from the source
    NegativeCycle { rounds_run: usize },
}

/// Outcome of a single source/destination query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "distance", rename_all = "snake_case")]
pub enum ShortestPathOutcome<W> {
    /// Finite shortest-path length
    Distance(W),
    /// Destination exists but no path reaches it
    Unreachable,
    /// Shortest-path length is unbounded below
    NegativeCycleDetected,
}

impl<W: fmt::Display> fmt::Display for ShortestPathOutcome<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortestPathOutcome::Distance(w) => write!(f, "distance {}", w),
            ShortestPathOutcome::Unreachable => write!(f, "unreachable"),
            ShortestPathOutcome::NegativeCycleDetected => write!(f, "negative cycle detected"),
        }
    }
}

/// Shortest-path distance from `source` to `destination`
///
/// Builds the adjacency index from `edges` and runs Bellman-Ford with the
/// default options.
///
/// # Returns
/// * `Ok(ShortestPathOutcome)` - Distance, unreachable, or negative cycle
/// * `Err(AlgorithmError::UnknownVertex)` - `source` or `destination` appears in no edge
pub fn shortest_path<V, W, I, E>(
    edges: I,
    source: &V,
    destination: &V,
) -> AlgorithmResult<ShortestPathOutcome<W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<WeightedEdge<V, W>>,
{
    shortest_path_with_options(edges, source, destination, &RelaxationOptions::default())
}

/// [`shortest_path`] with explicit relaxation options
pub fn shortest_path_with_options<V, W, I, E>(
    edges: I,
    source: &V,
    destination: &V,
    options: &RelaxationOptions,
) -> AlgorithmResult<ShortestPathOutcome<W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<WeightedEdge<V, W>>,
{
    let graph = IndexedGraph::from_edges(edges);
    query(&graph, source, destination, options)
}

/// Answer one query against an already indexed graph
pub fn query<V, W>(
    graph: &IndexedGraph<V, W>,
    source: &V,
    destination: &V,
    options: &RelaxationOptions,
) -> AlgorithmResult<ShortestPathOutcome<W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    // Both endpoints are checked before any relaxation work
    require(graph, source, VertexRole::Source)?;
    let destination = require(graph, destination, VertexRole::Destination)?;

    match bellman_ford(graph, source, options)? {
        RelaxationOutcome::NegativeCycle { .. } => Ok(ShortestPathOutcome::NegativeCycleDetected),
        RelaxationOutcome::Converged(table) => Ok(match table.distances[destination] {
            Distance::Finite(w) => ShortestPathOutcome::Distance(w),
            Distance::Infinite => ShortestPathOutcome::Unreachable,
        }),
    }
}

/// Run Bellman-Ford from `source` over the whole graph
pub fn bellman_ford<'g, V, W>(
    graph: &'g IndexedGraph<V, W>,
    source: &V,
    options: &RelaxationOptions,
) -> AlgorithmResult<RelaxationOutcome<'g, V, W>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    let source = require(graph, source, VertexRole::Source)?;

    if let Some(edge) = graph.find_non_finite_weight() {
        return Err(AlgorithmError::NonFiniteWeight {
            tail: format!("{:?}", edge.tail),
            head: format!("{:?}", edge.head),
        });
    }

    let rounds = options.round_limit.rounds(graph);
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        rounds,
        "starting Bellman-Ford relaxation"
    );

    let mut previous = vec![Distance::Infinite; graph.vertex_count()];
    previous[source] = Distance::Finite(W::ZERO);

    // Round 0 is the only snapshot; there is no earlier round to compare with
    if rounds == 0 {
        return settle(graph, previous, 0);
    }

    let mut current = previous.clone();
    let mut predecessors = vec![None; graph.vertex_count()];
    for round in 1..=rounds {
        let improved = match relax_round(graph.records(), &previous, &mut current, &mut predecessors) {
            Ok(improved) => improved,
            Err(underflow) if closes_cycle(&predecessors, &underflow) => {
                debug!(round, "distance fell below the weight range on a negative cycle");
                return Ok(RelaxationOutcome::NegativeCycle { rounds_run: round });
            }
            Err(_) => return Err(AlgorithmError::DistanceOverflow { round }),
        };
        trace!(round, improved, "relaxation round finished");

        if round == rounds {
            break;
        }

        if improved == 0 && options.stop_on_convergence {
            debug!(round, "distances converged early");
            return settle(graph, current, round);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    if current == previous {
        debug!(rounds, "distances converged");
        settle(graph, current, rounds)
    } else {
        debug!(rounds, "distances still changing, negative cycle reachable from source");
        Ok(RelaxationOutcome::NegativeCycle { rounds_run: rounds })
    }
}

/// A candidate for `head` through `tail` fell below the weight type's range
#[derive(Debug)]
struct Underflow {
    tail: usize,
    head: usize,
}

/// Relax every vertex once against the previous round
///
/// Returns how many vertices improved. A candidate that overflows upward is
/// larger than any representable estimate and is dropped; one that overflows
/// downward stops the round.
fn relax_round<W: Weight>(
    records: &[AdjacencyRecord<W>],
    previous: &[Distance<W>],
    current: &mut [Distance<W>],
    predecessors: &mut [Option<usize>],
) -> Result<usize, Underflow> {
    let mut improved = 0;

    for (vertex, record) in records.iter().enumerate() {
        let mut best = previous[vertex];
        let mut via = None;

        for edge in &record.incoming {
            // Infinite + w stays infinite and can never win the min
            let Distance::Finite(from) = previous[edge.vertex] else {
                continue;
            };

            match from.checked_sum(edge.weight) {
                Some(candidate) => {
                    let next = best.min_with(candidate);
                    if next != best {
                        best = next;
                        via = Some(edge.vertex);
                    }
                }
                None if edge.weight < W::ZERO => {
                    return Err(Underflow {
                        tail: edge.vertex,
                        head: vertex,
                    })
                }
                None => {}
            }
        }

        if let Some(tail) = via {
            improved += 1;
            predecessors[vertex] = Some(tail);
        }
        current[vertex] = best;
    }

    Ok(improved)
}

/// Whether following predecessors back from the underflowing edge's tail
/// runs into a cycle
///
/// Every cycle in the predecessor graph has negative weight, and the edge
/// `tail -> head` strictly improves `head`, so reaching `head` again closes
/// a negative cycle. A chain that ends at the source instead is a simple
/// path whose weight is below the representable range.
fn closes_cycle(predecessors: &[Option<usize>], underflow: &Underflow) -> bool {
    let mut seen = vec![false; predecessors.len()];
    let mut cursor = Some(underflow.tail);

    while let Some(vertex) = cursor {
        if vertex == underflow.head || seen[vertex] {
            return true;
        }
        seen[vertex] = true;
        cursor = predecessors[vertex];
    }

    false
}

/// Wrap converged distances, rejecting vertices whose distance overflowed
///
/// After convergence an infinite vertex with a finite predecessor can only
/// be one whose every candidate overflowed upward.
fn settle<V, W>(
    graph: &IndexedGraph<V, W>,
    distances: Vec<Distance<W>>,
    rounds_run: usize,
) -> AlgorithmResult<RelaxationOutcome<'_, V, W>>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let overflowed = graph.records().iter().zip(&distances).any(|(record, distance)| {
        *distance == Distance::Infinite
            && record
                .incoming
                .iter()
                .any(|edge| matches!(distances[edge.vertex], Distance::Finite(_)))
    });

    if overflowed {
        return Err(AlgorithmError::DistanceOverflow { round: rounds_run });
    }

    Ok(RelaxationOutcome::Converged(DistanceTable {
        graph,
        distances,
        rounds_run,
    }))
}

fn require<V, W>(graph: &IndexedGraph<V, W>, vertex: &V, role: VertexRole) -> AlgorithmResult<usize>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    graph
        .index_of(vertex)
        .ok_or_else(|| AlgorithmError::UnknownVertex {
            role,
            vertex: format!("{:?}", vertex),
        })
}

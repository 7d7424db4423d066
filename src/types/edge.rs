use serde::{Deserialize, Serialize};

/// Weighted directed edge
///
/// Represents a directed edge with:
/// - Tail vertex (where the edge starts)
/// - Head vertex (where the edge ends)
/// - Signed weight
///
/// Parallel edges between the same ordered pair are allowed and are kept
/// as independent edges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WeightedEdge<V, W> {
    /// Tail vertex (source of the edge)
    pub tail: V,

    /// Head vertex (target of the edge)
    pub head: V,

    /// Edge weight, may be negative
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    /// Create a new edge
    pub fn new(tail: V, head: V, weight: W) -> Self {
        Self { tail, head, weight }
    }

}

impl<V, W> From<(V, V, W)> for WeightedEdge<V, W> {
    fn from((tail, head, weight): (V, V, W)) -> Self {
        Self::new(tail, head, weight)
    }
}

impl<V, W> From<WeightedEdge<V, W>> for (V, V, W) {
    fn from(edge: WeightedEdge<V, W>) -> Self {
        (edge.tail, edge.head, edge.weight)
    }
}

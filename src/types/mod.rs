/// Core data types
///
/// This module defines the fundamental types used throughout the crate:
/// - WeightedEdge: directed edge triple (tail, head, weight)
/// - Weight: numeric types accepted as edge weights
/// - Distance: finite distance or positive infinity

pub mod edge;
pub mod weight;

pub use edge::WeightedEdge;
pub use weight::{Distance, Weight};

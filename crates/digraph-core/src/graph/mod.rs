//! Directed graph and traversal-derived queries
//!
//! Provides the graph engine built on the `adt` containers:
//! - Vertex/edge maintenance keyed by label
//! - Iterative BFS and DFS over a shared frontier skeleton
//! - BFS/DFS spanning trees returned as graphs of the same shape
//! - Unweighted shortest-path reconstruction

pub mod directed;
pub mod frontier;
pub mod path;
pub mod sample;
pub mod traversal;
pub mod tree;
pub mod types;
pub mod vertex;

use std::fmt::Debug;

use crate::adt::Blank;

pub use directed::DirectedGraph;
pub use frontier::{Frontier, Marking};
pub use sample::{sample_graph, SAMPLE_EDGES, SAMPLE_ORIGIN, SAMPLE_VERTICES};
pub use types::{GraphSize, PathCost, PathResult, TraversalKind, DEFAULT_EDGE_WEIGHT};
pub use vertex::{AdjacencyList, Edge, Vertex};

/// Requirements on vertex labels
pub trait Label: Ord + Clone + Blank + Debug {}

impl<T: Ord + Clone + Blank + Debug> Label for T {}

#[cfg(test)]
mod tests;

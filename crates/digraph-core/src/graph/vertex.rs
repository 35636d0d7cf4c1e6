//! Vertices and their outgoing edges
//!
//! A vertex never owns its neighbors. Edges and predecessors refer to other
//! vertices by label, and the owning graph resolves labels through its
//! dictionary.

use crate::adt::Blank;
use crate::graph::types::PathCost;

/// Outgoing edge to `destination`
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<L> {
    destination: L,
    weight: f64,
}

impl<L> Edge<L> {
    pub fn new(destination: L, weight: f64) -> Self {
        Edge {
            destination,
            weight,
        }
    }

    pub fn destination(&self) -> &L {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Outgoing edges of one vertex, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList<L> {
    edges: Vec<Edge<L>>,
}

impl<L> Default for AdjacencyList<L> {
    fn default() -> Self {
        AdjacencyList { edges: Vec::new() }
    }
}

impl<L: PartialEq> AdjacencyList<L> {
    pub fn insert(&mut self, edge: Edge<L>) {
        self.edges.push(edge);
    }

    pub fn contains(&self, destination: &L) -> bool {
        self.edges.iter().any(|edge| edge.destination == *destination)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> {
        self.edges.iter()
    }

    pub fn neighbors(&self) -> impl Iterator<Item = &L> {
        self.edges.iter().map(Edge::destination)
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(Edge::weight)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A labelled vertex with traversal scratch state.
///
/// `visited`, `predecessor` and `cost` only mean something during the query
/// that last set them.
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    label: L,
    edges: AdjacencyList<L>,
    visited: bool,
    predecessor: Option<L>,
    cost: PathCost,
}

impl<L: Clone + PartialEq> Vertex<L> {
    pub fn new(label: L) -> Self {
        Vertex {
            label,
            edges: AdjacencyList::default(),
            visited: false,
            predecessor: None,
            cost: PathCost::ZERO,
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Add an edge to `target` unless it is this vertex or already a neighbor
    pub fn connect(&mut self, target: &L, weight: f64) -> bool {
        if *target == self.label || self.edges.contains(target) {
            return false;
        }
        self.edges.insert(Edge::new(target.clone(), weight));
        true
    }

    pub fn adjacency(&self) -> &AdjacencyList<L> {
        &self.edges
    }

    /// Neighbor labels in edge-insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = &L> {
        self.edges.neighbors()
    }

    /// Edge weights, parallel to [`Vertex::neighbors`]
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.weights()
    }

    pub fn has_neighbor(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn is_neighbor(&self, target: &L) -> bool {
        self.edges.contains(target)
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn unvisit(&mut self) {
        self.visited = false;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_predecessor(&mut self, predecessor: Option<L>) {
        self.predecessor = predecessor;
    }

    pub fn predecessor(&self) -> Option<&L> {
        self.predecessor.as_ref()
    }

    pub fn has_predecessor(&self) -> bool {
        self.predecessor.is_some()
    }

    pub fn set_cost(&mut self, cost: PathCost) {
        self.cost = cost;
    }

    pub fn cost(&self) -> PathCost {
        self.cost
    }

    /// Clear scratch state before a query
    pub fn reset(&mut self) {
        self.visited = false;
        self.predecessor = None;
        self.cost = PathCost::ZERO;
    }
}

/// Vertices compare by label only
impl<L: PartialEq> PartialEq for Vertex<L> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<L: Eq> Eq for Vertex<L> {}

impl<L> Blank for Vertex<L> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_appends_in_order() {
        let mut vertex = Vertex::new('A');
        assert!(vertex.connect(&'D', 0.0));
        assert!(vertex.connect(&'B', 2.5));
        assert!(vertex.connect(&'C', 1.0));

        let neighbors: Vec<_> = vertex.neighbors().copied().collect();
        assert_eq!(neighbors, vec!['D', 'B', 'C']);
        let weights: Vec<_> = vertex.weights().collect();
        assert_eq!(weights, vec![0.0, 2.5, 1.0]);
        assert!(vertex.has_neighbor());
    }

    #[test]
    fn test_connect_rejects_self_loop() {
        let mut vertex = Vertex::new("a".to_string());
        assert!(!vertex.connect(&"a".to_string(), 0.0));
        assert!(!vertex.has_neighbor());
    }

    #[test]
    fn test_connect_rejects_parallel_edge() {
        let mut vertex = Vertex::new(1u32);
        assert!(vertex.connect(&2, 0.0));
        assert!(!vertex.connect(&2, 9.0));
        assert_eq!(vertex.adjacency().len(), 1);
        assert_eq!(vertex.weights().next(), Some(0.0));
    }

    #[test]
    fn test_equality_is_by_label() {
        let mut connected = Vertex::new('X');
        connected.connect(&'Y', 0.0);
        connected.visit();
        let fresh = Vertex::new('X');
        assert_eq!(connected, fresh);
        assert_ne!(fresh, Vertex::new('Y'));
    }

    #[test]
    fn test_reset_clears_scratch_state() {
        let mut vertex = Vertex::new('B');
        vertex.visit();
        vertex.set_predecessor(Some('A'));
        vertex.set_cost(PathCost::from(3));
        assert!(vertex.is_visited());
        assert!(vertex.has_predecessor());

        vertex.reset();
        assert!(!vertex.is_visited());
        assert_eq!(vertex.predecessor(), None);
        assert_eq!(vertex.cost(), PathCost::ZERO);
    }

    #[test]
    fn test_reset_keeps_edges() {
        let mut vertex = Vertex::new('B');
        vertex.connect(&'C', 0.0);
        vertex.visit();
        vertex.unvisit();
        vertex.reset();
        assert!(vertex.is_neighbor(&'C'));
    }
}

use crate::adt::SortedDictionary;
use crate::error::Result;
use crate::graph::types::{GraphSize, DEFAULT_EDGE_WEIGHT};
use crate::graph::vertex::{Edge, Vertex};
use crate::graph::Label;

/// Directed graph whose vertices are owned by a sorted dictionary.
///
/// Self-loops and parallel edges are rejected. Queries reuse the vertices'
/// scratch state, so they take `&mut self`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<L> {
    pub(crate) vertices: SortedDictionary<L, Vertex<L>>,
    pub(crate) edge_count: usize,
}

impl<L: Label> Default for DirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> DirectedGraph<L> {
    pub fn new() -> Self {
        DirectedGraph {
            vertices: SortedDictionary::new(),
            edge_count: 0,
        }
    }

    /// Add a vertex for `label`.
    ///
    /// Returns `Ok(false)` if the label is already present; the existing
    /// vertex and its edges are left alone. Blank labels are rejected.
    pub fn add_vertex(&mut self, label: L) -> Result<bool> {
        if self.vertices.contains(&label) {
            tracing::trace!(label = ?label, "vertex already present");
            return Ok(false);
        }
        let vertex = Vertex::new(label.clone());
        self.vertices.add(label, vertex)?;
        Ok(true)
    }

    /// Add an edge with the default weight
    pub fn add_edge(&mut self, source: &L, target: &L) -> bool {
        self.add_weighted_edge(source, target, DEFAULT_EDGE_WEIGHT)
    }

    /// Add an edge from `source` to `target`.
    ///
    /// Returns false, changing nothing, if either label is unknown, the
    /// labels are equal, or the edge already exists.
    pub fn add_weighted_edge(&mut self, source: &L, target: &L, weight: f64) -> bool {
        if !self.vertices.contains(target) {
            tracing::debug!(source = ?source, target = ?target, "edge target not in graph");
            return false;
        }
        let Some(begin) = self.vertices.lookup_mut(source) else {
            tracing::debug!(source = ?source, target = ?target, "edge source not in graph");
            return false;
        };

        let added = begin.connect(target, weight);
        if added {
            self.edge_count += 1;
            tracing::trace!(source = ?source, target = ?target, weight, "edge added");
        } else {
            tracing::debug!(source = ?source, target = ?target, "edge rejected");
        }
        added
    }

    /// True iff both vertices exist and `target` is a neighbor of `source`
    pub fn has_edge(&self, source: &L, target: &L) -> bool {
        if !self.vertices.contains(target) {
            return false;
        }
        self.vertices
            .lookup(source)
            .is_some_and(|vertex| vertex.is_neighbor(target))
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    /// Read access to a vertex, including state left by the last query
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.lookup(label)
    }

    /// Neighbors of `label` in edge-insertion order, or `None` if absent
    pub fn neighbors(&self, label: &L) -> Option<impl Iterator<Item = &L>> {
        self.vertices.lookup(label).map(Vertex::neighbors)
    }

    /// Labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.vertices.keys()
    }

    /// `(source, edge)` pairs, sources ascending, insertion order per source
    pub fn edges(&self) -> impl Iterator<Item = (&L, &Edge<L>)> {
        self.vertices
            .values()
            .flat_map(|vertex| vertex.adjacency().edges().map(move |edge| (vertex.label(), edge)))
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn size(&self) -> GraphSize {
        GraphSize {
            vertices: self.vertex_count(),
            edges: self.edge_count,
        }
    }

    /// Remove every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// Reset visited flag, cost and predecessor on every vertex
    pub(crate) fn reset_vertices(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset();
        }
    }

    pub(crate) fn is_visited(&self, label: &L) -> bool {
        self.vertices.lookup(label).is_some_and(Vertex::is_visited)
    }

    /// A graph with the same labels and no edges
    pub(crate) fn isolated_copy(&self) -> DirectedGraph<L> {
        DirectedGraph {
            vertices: self
                .vertices
                .map_values(|label, _| Vertex::new(label.clone())),
            edge_count: 0,
        }
    }
}

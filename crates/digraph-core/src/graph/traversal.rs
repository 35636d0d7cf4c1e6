use std::ops::ControlFlow;

use crate::adt::{Queue, Stack};
use crate::graph::frontier::{Frontier, Marking};
use crate::graph::types::{PathCost, TraversalKind};
use crate::graph::{DirectedGraph, Label};

/// A vertex waiting in the frontier, with the vertex that put it there
#[derive(Debug, Clone)]
pub(crate) struct Pending<L> {
    pub(crate) label: L,
    pub(crate) parent: Option<L>,
}

impl<L: Label> DirectedGraph<L> {
    /// Breadth-first visitation order from `origin`.
    ///
    /// Empty if `origin` is not in the graph.
    #[tracing::instrument(skip(self))]
    pub fn traverse_breadth_first(&mut self, origin: &L) -> Vec<L> {
        self.explore::<Queue<Pending<L>>, _>(origin, |_, _| ControlFlow::Continue(()))
    }

    /// Depth-first visitation order from `origin`.
    ///
    /// Neighbors are explored left to right, matching recursive DFS.
    /// Empty if `origin` is not in the graph.
    #[tracing::instrument(skip(self))]
    pub fn traverse_depth_first(&mut self, origin: &L) -> Vec<L> {
        self.explore::<Stack<Pending<L>>, _>(origin, |_, _| ControlFlow::Continue(()))
    }

    pub fn traverse(&mut self, kind: TraversalKind, origin: &L) -> Vec<L> {
        match kind {
            TraversalKind::BreadthFirst => self.traverse_breadth_first(origin),
            TraversalKind::DepthFirst => self.traverse_depth_first(origin),
        }
    }

    /// Shared traversal skeleton.
    ///
    /// Resets every vertex, then drives frontier `F` from `origin`. Each
    /// discovery marks the vertex visited, records its predecessor and hop
    /// cost, appends it to the returned order and reports
    /// `(parent, discovered)` to `on_discover`. Returning
    /// `ControlFlow::Break` stops the search immediately.
    pub(crate) fn explore<F, D>(&mut self, origin: &L, mut on_discover: D) -> Vec<L>
    where
        F: Frontier<Pending<L>>,
        D: FnMut(Option<&L>, &L) -> ControlFlow<()>,
    {
        self.reset_vertices();
        let mut order = Vec::new();
        if !self.contains_vertex(origin) {
            tracing::debug!(origin = ?origin, "origin not in graph");
            return order;
        }

        let mut frontier = F::default();
        let root = Pending {
            label: origin.clone(),
            parent: None,
        };

        match F::MARKING {
            Marking::OnInsert => {
                if self
                    .discover(&root, &mut order, &mut on_discover)
                    .is_break()
                {
                    return order;
                }
                frontier.insert_batch(vec![root]);

                while let Some(current) = frontier.take_next() {
                    let mut batch = Vec::new();
                    for neighbor in self.neighbor_labels(&current.label) {
                        if self.is_visited(&neighbor) {
                            continue;
                        }
                        let entry = Pending {
                            label: neighbor,
                            parent: Some(current.label.clone()),
                        };
                        if self
                            .discover(&entry, &mut order, &mut on_discover)
                            .is_break()
                        {
                            return order;
                        }
                        batch.push(entry);
                    }
                    frontier.insert_batch(batch);
                }
            }
            Marking::OnRemove => {
                frontier.insert_batch(vec![root]);

                while let Some(current) = frontier.take_next() {
                    if self.is_visited(&current.label) {
                        continue;
                    }
                    if self
                        .discover(&current, &mut order, &mut on_discover)
                        .is_break()
                    {
                        return order;
                    }
                    let batch: Vec<_> = self
                        .neighbor_labels(&current.label)
                        .into_iter()
                        .filter(|neighbor| !self.is_visited(neighbor))
                        .map(|neighbor| Pending {
                            label: neighbor,
                            parent: Some(current.label.clone()),
                        })
                        .collect();
                    frontier.insert_batch(batch);
                }
            }
        }

        tracing::debug!(visited = order.len(), "traversal complete");
        order
    }

    fn neighbor_labels(&self, label: &L) -> Vec<L> {
        self.vertices
            .lookup(label)
            .map(|vertex| vertex.neighbors().cloned().collect())
            .unwrap_or_default()
    }

    fn discover<D>(
        &mut self,
        entry: &Pending<L>,
        order: &mut Vec<L>,
        on_discover: &mut D,
    ) -> ControlFlow<()>
    where
        D: FnMut(Option<&L>, &L) -> ControlFlow<()>,
    {
        let cost = entry
            .parent
            .as_ref()
            .and_then(|parent| self.vertices.lookup(parent))
            .map_or(PathCost::ZERO, |parent| parent.cost() + PathCost::HOP);

        if let Some(vertex) = self.vertices.lookup_mut(&entry.label) {
            vertex.visit();
            vertex.set_predecessor(entry.parent.clone());
            vertex.set_cost(cost);
        }
        tracing::trace!(
            label = ?entry.label,
            parent = ?entry.parent,
            hops = cost.as_hops(),
            "discovered"
        );

        order.push(entry.label.clone());
        on_discover(entry.parent.as_ref(), &entry.label)
    }
}

use std::ops::ControlFlow;

use crate::adt::{Queue, Stack};
use crate::graph::frontier::Frontier;
use crate::graph::traversal::Pending;
use crate::graph::types::TraversalKind;
use crate::graph::{DirectedGraph, Label};

impl<L: Label> DirectedGraph<L> {
    /// Spanning tree of the vertices reachable from `origin`, found by BFS
    #[tracing::instrument(skip(self))]
    pub fn breadth_first_tree(&mut self, origin: &L) -> DirectedGraph<L> {
        self.spanning_tree_with::<Queue<Pending<L>>>(origin)
    }

    /// Spanning tree of the vertices reachable from `origin`, found by DFS
    #[tracing::instrument(skip(self))]
    pub fn depth_first_tree(&mut self, origin: &L) -> DirectedGraph<L> {
        self.spanning_tree_with::<Stack<Pending<L>>>(origin)
    }

    /// Spanning tree for `kind`.
    ///
    /// The tree holds every label of this graph. Its only edges are the
    /// ones through which each vertex was first discovered, added in
    /// discovery order, so traversing the tree from `origin` with the same
    /// `kind` reproduces this graph's traversal order.
    pub fn spanning_tree(&mut self, origin: &L, kind: TraversalKind) -> DirectedGraph<L> {
        match kind {
            TraversalKind::BreadthFirst => self.breadth_first_tree(origin),
            TraversalKind::DepthFirst => self.depth_first_tree(origin),
        }
    }

    fn spanning_tree_with<F>(&mut self, origin: &L) -> DirectedGraph<L>
    where
        F: Frontier<Pending<L>>,
    {
        let mut tree = self.isolated_copy();
        self.explore::<F, _>(origin, |parent, discovered| {
            if let Some(parent) = parent {
                tree.add_edge(parent, discovered);
            }
            ControlFlow::Continue(())
        });
        tracing::debug!(tree_edges = tree.edge_count(), "spanning tree built");
        tree
    }
}

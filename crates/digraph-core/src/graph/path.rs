//! Path queries
//!
//! Only the unweighted shortest path is supported. Weighted queries and
//! topological ordering are reported as not implemented.

use std::ops::ControlFlow;

use crate::adt::{Queue, Stack};
use crate::bail_not_implemented;
use crate::error::Result;
use crate::graph::traversal::Pending;
use crate::graph::types::PathResult;
use crate::graph::{DirectedGraph, Label};

impl<L: Label> DirectedGraph<L> {
    /// Fewest-edges path from `begin` to `end`.
    ///
    /// Runs BFS from `begin` and stops as soon as `end` is discovered. The
    /// result has `found == false` when either label is absent or `end` is
    /// unreachable. A vertex reaches itself with length 0.
    #[tracing::instrument(skip(self))]
    pub fn shortest_path(&mut self, begin: &L, end: &L) -> PathResult<L> {
        if !self.contains_vertex(begin) || !self.contains_vertex(end) {
            self.reset_vertices();
            tracing::debug!("endpoint not in graph");
            return PathResult::not_found(begin.clone(), end.clone());
        }

        self.explore::<Queue<Pending<L>>, _>(begin, |_, discovered| {
            if discovered == end {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        let Some(end_vertex) = self.vertex(end).filter(|vertex| vertex.is_visited()) else {
            tracing::debug!("no path");
            return PathResult::not_found(begin.clone(), end.clone());
        };
        let path_length = end_vertex.cost().as_hops();

        let mut stack = Stack::new();
        stack.push(end.clone());
        let mut on_path = end_vertex;
        while let Some(predecessor) = on_path.predecessor() {
            stack.push(predecessor.clone());
            match self.vertex(predecessor) {
                Some(vertex) => on_path = vertex,
                None => break,
            }
        }
        let path: Vec<L> = stack.drain().collect();

        tracing::debug!(path_length, "path found");
        PathResult {
            from: begin.clone(),
            to: end.clone(),
            found: true,
            path_length,
            path,
        }
    }

    /// Least-weight path. Not provided by this graph.
    pub fn cheapest_path(&mut self, _begin: &L, _end: &L) -> Result<PathResult<L>> {
        bail_not_implemented!("cheapest path")
    }

    /// Topological order. Not provided by this graph.
    pub fn topological_order(&mut self) -> Result<Vec<L>> {
        bail_not_implemented!("topological order")
    }
}

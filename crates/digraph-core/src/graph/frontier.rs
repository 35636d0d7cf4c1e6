//! Frontier abstraction shared by breadth-first and depth-first traversal
//!
//! The traversal skeleton only needs to hand a batch of newly found
//! neighbors to the frontier and take the next vertex to expand. The
//! container decides the order, and [`Marking`] decides when a vertex
//! counts as visited.

use crate::adt::{Queue, Stack};

/// When a vertex becomes visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marking {
    /// Visited as soon as it enters the frontier; each vertex enters once
    OnInsert,
    /// Visited when first taken out; a vertex may sit in the frontier more
    /// than once and later copies are skipped
    OnRemove,
}

/// A container holding vertices awaiting expansion
pub trait Frontier<T>: Default {
    const MARKING: Marking;

    /// Add a batch so that the batch's first item is taken first
    fn insert_batch(&mut self, items: Vec<T>);

    /// Remove the next item to expand
    fn take_next(&mut self) -> Option<T>;
}

impl<T> Frontier<T> for Queue<T> {
    const MARKING: Marking = Marking::OnInsert;

    fn insert_batch(&mut self, items: Vec<T>) {
        for item in items {
            self.enqueue(item);
        }
    }

    fn take_next(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.dequeue().ok()
    }
}

impl<T> Frontier<T> for Stack<T> {
    const MARKING: Marking = Marking::OnRemove;

    /// Push through a temporary stack so the first item ends up on top
    fn insert_batch(&mut self, items: Vec<T>) {
        let mut reversed = Stack::new();
        for item in items {
            reversed.push(item);
        }
        for item in reversed.drain() {
            self.push(item);
        }
    }

    fn take_next(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.pop().ok()
    }
}

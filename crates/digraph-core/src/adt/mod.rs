//! Container primitives used by the graph engine
//!
//! - `queue`: FIFO frontier for breadth-first work
//! - `stack`: LIFO frontier for depth-first work and path reconstruction
//! - `dictionary`: sorted label-to-value map that owns the vertices

pub mod dictionary;
pub mod queue;
pub mod stack;

pub use dictionary::{Blank, SortedDictionary};
pub use queue::Queue;
pub use stack::Stack;

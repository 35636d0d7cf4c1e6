//! Digraph Core Library
//!
//! Directed graph ADT with iterative traversals, spanning trees and
//! unweighted shortest paths, built on small queue, stack and sorted
//! dictionary primitives.

pub mod adt;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

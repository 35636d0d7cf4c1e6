//! The reference sample graph: nine vertices `A..I`, thirteen edges.

use crate::error::Result;
use crate::graph::{DirectedGraph, Label};

pub const SAMPLE_ORIGIN: char = 'A';

pub const SAMPLE_VERTICES: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

pub const SAMPLE_EDGES: [(char, char); 13] = [
    ('A', 'B'),
    ('A', 'D'),
    ('A', 'E'),
    ('B', 'E'),
    ('D', 'G'),
    ('E', 'F'),
    ('E', 'H'),
    ('G', 'H'),
    ('F', 'C'),
    ('F', 'H'),
    ('H', 'I'),
    ('C', 'B'),
    ('I', 'F'),
];

/// Build a fresh copy of the sample graph.
///
/// Works for any label type constructible from `char`, such as `char`
/// itself or `String`.
pub fn sample_graph<L: Label + From<char>>() -> Result<DirectedGraph<L>> {
    let mut graph = DirectedGraph::new();
    for label in SAMPLE_VERTICES {
        graph.add_vertex(L::from(label))?;
    }
    for (source, target) in SAMPLE_EDGES {
        graph.add_edge(&L::from(source), &L::from(target));
    }
    Ok(graph)
}

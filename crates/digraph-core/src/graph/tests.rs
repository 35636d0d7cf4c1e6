use crate::error::GraphError;
use crate::graph::*;

fn sample() -> DirectedGraph<char> {
    sample_graph().unwrap()
}

fn graph_from(labels: &[char], edges: &[(char, char)]) -> DirectedGraph<char> {
    let mut graph = DirectedGraph::new();
    for label in labels {
        graph.add_vertex(*label).unwrap();
    }
    for (source, target) in edges {
        assert!(graph.add_edge(source, target), "edge {source}->{target}");
    }
    graph
}

fn tree_edges(tree: &DirectedGraph<char>) -> Vec<(char, char)> {
    tree.edges()
        .map(|(source, edge)| (*source, *edge.destination()))
        .collect()
}

#[test]
fn test_sample_graph_size() {
    let graph = sample();
    assert_eq!(
        graph.size(),
        GraphSize {
            vertices: 9,
            edges: 13
        }
    );
    assert!(!graph.is_empty());
    let labels: String = graph.labels().collect();
    assert_eq!(labels, "ABCDEFGHI");
}

#[test]
fn test_sample_breadth_first() {
    let mut graph = sample();
    let order = graph.traverse_breadth_first(&'A');
    assert_eq!(order, vec!['A', 'B', 'D', 'E', 'G', 'F', 'H', 'C', 'I']);
}

/// Mark-on-pop DFS explores the first neighbor first, like recursive DFS
#[test]
fn test_sample_depth_first() {
    let mut graph = sample();
    let order = graph.traverse_depth_first(&'A');
    assert_eq!(order, vec!['A', 'B', 'E', 'F', 'C', 'H', 'I', 'D', 'G']);
}

#[test]
fn test_traverse_dispatches_on_kind() {
    let mut graph = sample();
    assert_eq!(
        graph.traverse(TraversalKind::BreadthFirst, &'A'),
        graph.traverse_breadth_first(&'A')
    );
    assert_eq!(
        graph.traverse(TraversalKind::DepthFirst, &'E'),
        graph.traverse_depth_first(&'E')
    );
}

#[test]
fn test_traversal_from_unknown_origin_is_empty() {
    let mut graph = sample();
    assert!(graph.traverse_breadth_first(&'Z').is_empty());
    assert!(graph.traverse_depth_first(&'Z').is_empty());
}

#[test]
fn test_traversal_only_reaches_reachable_vertices() {
    let mut graph = sample();
    // A has no inbound edges and D, G are only reachable through A
    let order = graph.traverse_breadth_first(&'B');
    assert_eq!(order, vec!['B', 'E', 'F', 'H', 'C', 'I']);
    assert!(!graph.vertex(&'A').unwrap().is_visited());
}

/// A vertex pushed twice is only visited on its first pop
#[test]
fn test_depth_first_skips_stale_stack_entries() {
    let mut graph = graph_from(&['A', 'B', 'C'], &[('A', 'B'), ('A', 'C'), ('B', 'C')]);
    assert_eq!(graph.traverse_depth_first(&'A'), vec!['A', 'B', 'C']);
    assert_eq!(graph.vertex(&'C').unwrap().predecessor(), Some(&'B'));

    // BFS discovers C from A instead
    assert_eq!(graph.traverse_breadth_first(&'A'), vec!['A', 'B', 'C']);
    assert_eq!(graph.vertex(&'C').unwrap().predecessor(), Some(&'A'));
}

#[test]
fn test_breadth_first_records_levels() {
    let mut graph = sample();
    graph.traverse_breadth_first(&'A');
    let hops = |label: char| graph.vertex(&label).unwrap().cost().as_hops();
    assert_eq!(hops('A'), 0);
    assert_eq!(hops('B'), 1);
    assert_eq!(hops('G'), 2);
    assert_eq!(hops('H'), 2);
    assert_eq!(hops('C'), 3);
    assert_eq!(hops('I'), 3);
}

#[test]
fn test_shortest_path_sample() {
    let mut graph = sample();
    let result = graph.shortest_path(&'A', &'I');
    assert!(result.found);
    assert_eq!(result.path_length, 3);
    assert_eq!(result.length(), Some(3));
    assert_eq!(result.path, vec!['A', 'E', 'H', 'I']);
}

#[test]
fn test_shortest_path_to_self() {
    let mut graph = sample();
    for label in SAMPLE_VERTICES {
        let result = graph.shortest_path(&label, &label);
        assert!(result.found);
        assert_eq!(result.path_length, 0);
        assert_eq!(result.path, vec![label]);
    }
}

#[test]
fn test_shortest_path_unreachable() {
    let mut graph = sample();
    let result = graph.shortest_path(&'B', &'A');
    assert!(!result.found);
    assert_eq!(result.length(), None);
    assert!(result.path.is_empty());
}

#[test]
fn test_shortest_path_unknown_endpoints() {
    let mut graph = sample();
    assert!(!graph.shortest_path(&'Z', &'A').found);
    assert!(!graph.shortest_path(&'A', &'Z').found);
}

#[test]
fn test_shortest_path_stops_at_discovery() {
    let mut graph = sample();
    graph.shortest_path(&'A', &'D');
    // D is A's second neighbor, so A's third neighbor is never discovered
    assert!(graph.vertex(&'B').unwrap().is_visited());
    assert!(graph.vertex(&'D').unwrap().is_visited());
    assert!(!graph.vertex(&'E').unwrap().is_visited());
    assert!(!graph.vertex(&'G').unwrap().is_visited());
}

#[test]
fn test_queries_reset_previous_state() {
    let mut graph = sample();
    graph.shortest_path(&'A', &'I');
    assert!(graph.vertex(&'I').unwrap().has_predecessor());

    graph.traverse_breadth_first(&'Z');
    for label in SAMPLE_VERTICES {
        let vertex = graph.vertex(&label).unwrap();
        assert!(!vertex.is_visited());
        assert!(!vertex.has_predecessor());
        assert_eq!(vertex.cost(), PathCost::ZERO);
    }
}

#[test]
fn test_breadth_first_tree_edges() {
    let mut graph = sample();
    let tree = graph.breadth_first_tree(&'A');
    assert_eq!(tree.vertex_count(), 9);
    assert_eq!(tree.edge_count(), 8);
    assert_eq!(
        tree_edges(&tree),
        vec![
            ('A', 'B'),
            ('A', 'D'),
            ('A', 'E'),
            ('D', 'G'),
            ('E', 'F'),
            ('E', 'H'),
            ('F', 'C'),
            ('H', 'I'),
        ]
    );
}

#[test]
fn test_depth_first_tree_edges() {
    let mut graph = sample();
    let tree = graph.depth_first_tree(&'A');
    assert_eq!(tree.edge_count(), 8);
    assert_eq!(
        tree_edges(&tree),
        vec![
            ('A', 'B'),
            ('A', 'D'),
            ('B', 'E'),
            ('D', 'G'),
            ('E', 'F'),
            ('F', 'C'),
            ('F', 'H'),
            ('H', 'I'),
        ]
    );
}

#[test]
fn test_tree_traversal_matches_graph_traversal() {
    let mut graph = sample();
    for kind in [TraversalKind::BreadthFirst, TraversalKind::DepthFirst] {
        for origin in SAMPLE_VERTICES {
            let expected = graph.traverse(kind, &origin);
            let mut tree = graph.spanning_tree(&origin, kind);
            assert_eq!(
                tree.traverse(kind, &origin),
                expected,
                "{kind} tree from {origin}"
            );
        }
    }
}

#[test]
fn test_tree_from_unknown_origin_has_no_edges() {
    let mut graph = sample();
    let tree = graph.spanning_tree(&'Z', TraversalKind::BreadthFirst);
    assert_eq!(tree.vertex_count(), 9);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_tree_leaves_source_graph_untouched() {
    let mut graph = sample();
    graph.depth_first_tree(&'A');
    assert_eq!(graph.edge_count(), 13);
    assert!(graph.has_edge(&'C', &'B'));
}

#[test]
fn test_add_vertex_twice() {
    let mut graph = sample();
    assert!(!graph.add_vertex('A').unwrap());
    assert_eq!(graph.vertex_count(), 9);
    let neighbors: Vec<_> = graph.neighbors(&'A').unwrap().copied().collect();
    assert_eq!(neighbors, vec!['B', 'D', 'E']);
}

#[test]
fn test_add_blank_vertex_rejected() {
    let mut graph: DirectedGraph<String> = DirectedGraph::new();
    let err = graph.add_vertex(String::new()).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert!(graph.is_empty());
}

#[test]
fn test_duplicate_edge_rejected() {
    let mut graph = sample();
    assert!(!graph.add_edge(&'A', &'B'));
    assert!(!graph.add_weighted_edge(&'A', &'B', 4.0));
    assert_eq!(graph.edge_count(), 13);
    assert_eq!(graph.neighbors(&'A').unwrap().count(), 3);
}

#[test]
fn test_self_loop_rejected() {
    let mut graph = sample();
    assert!(!graph.add_edge(&'C', &'C'));
    assert!(!graph.has_edge(&'C', &'C'));
    assert_eq!(graph.edge_count(), 13);
}

#[test]
fn test_edge_with_unknown_endpoint_rejected() {
    let mut graph = sample();
    assert!(!graph.add_edge(&'A', &'Z'));
    assert!(!graph.add_edge(&'Z', &'A'));
    assert_eq!(graph.edge_count(), 13);
    assert!(graph.neighbors(&'Z').is_none());
}

#[test]
fn test_has_edge_is_directed() {
    let graph = sample();
    assert!(graph.has_edge(&'I', &'F'));
    assert!(!graph.has_edge(&'F', &'I'));
    assert!(!graph.has_edge(&'A', &'Z'));
}

#[test]
fn test_weighted_edge_keeps_weight() {
    let mut graph = graph_from(&['A', 'B'], &[]);
    assert!(graph.add_weighted_edge(&'A', &'B', 2.5));
    let weights: Vec<_> = graph.vertex(&'A').unwrap().weights().collect();
    assert_eq!(weights, vec![2.5]);
}

#[test]
fn test_clear() {
    let mut graph = sample();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.size(), GraphSize { vertices: 0, edges: 0 });
    assert!(graph.traverse_breadth_first(&'A').is_empty());
}

#[test]
fn test_string_labels() {
    let mut graph: DirectedGraph<String> = sample_graph().unwrap();
    let order = graph.traverse_breadth_first(&"A".to_string());
    assert_eq!(order.concat(), "ABDEGFHCI");
}

#[test]
fn test_weighted_queries_not_implemented() {
    let mut graph = sample();
    assert!(matches!(
        graph.cheapest_path(&'A', &'I'),
        Err(GraphError::NotImplemented { .. })
    ));
    assert!(matches!(
        graph.topological_order(),
        Err(GraphError::NotImplemented { .. })
    ));
}

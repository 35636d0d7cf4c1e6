//! `digraph tree` command - BFS/DFS spanning trees

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::{load_graph, print_labels};
use digraph_core::error::Result;
use digraph_core::format::OutputFormat;
use digraph_core::graph::{DirectedGraph, TraversalKind};

#[derive(Serialize)]
struct TreeEdge<'a> {
    from: &'a str,
    to: &'a str,
}

#[derive(Serialize)]
struct TreeOutput<'a> {
    kind: TraversalKind,
    origin: &'a str,
    edges: Vec<TreeEdge<'a>>,
    order: &'a [String],
}

/// Build the spanning tree and its traversal from `origin`
pub(crate) fn tree_and_order(
    graph: &mut DirectedGraph<String>,
    kind: TraversalKind,
    origin: &str,
) -> (DirectedGraph<String>, Vec<String>) {
    let origin = origin.to_string();
    let mut tree = graph.spanning_tree(&origin, kind);
    let order = tree.traverse(kind, &origin);
    (tree, order)
}

/// Execute the tree command
pub fn execute(cli: &Cli, kind: TraversalKind, origin: Option<&str>) -> Result<()> {
    let mut loaded = load_graph(cli)?;
    let origin = loaded.resolve_origin(origin)?;
    let (tree, order) = tree_and_order(&mut loaded.graph, kind, &origin);

    match cli.format {
        OutputFormat::Json => {
            let edges = tree
                .edges()
                .map(|(from, edge)| TreeEdge {
                    from,
                    to: edge.destination(),
                })
                .collect();
            let output = TreeOutput {
                kind,
                origin: &origin,
                edges,
                order: &order,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for (from, edge) in tree.edges() {
                    println!("{} -> {}", from, edge.destination());
                }
            }
            let heading = format!("{} TREE traversal starting at {}", kind.describe(), origin);
            print_labels(cli, &heading, &order);
        }
    }

    Ok(())
}

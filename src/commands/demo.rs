//! `digraph demo` command
//!
//! Runs both traversals, both spanning-tree traversals and the shortest
//! path from the origin to the last vertex label.

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::{load_graph, print_labels};
use crate::commands::path::print_path;
use crate::commands::tree::tree_and_order;
use digraph_core::error::Result;
use digraph_core::format::OutputFormat;
use digraph_core::graph::{PathResult, TraversalKind};

#[derive(Serialize)]
struct DemoOutput<'a> {
    origin: &'a str,
    breadth_first: Vec<String>,
    depth_first: Vec<String>,
    breadth_first_tree: Vec<String>,
    depth_first_tree: Vec<String>,
    shortest_path: PathResult<String>,
}

/// Execute the demo command
pub fn execute(cli: &Cli, origin: Option<&str>) -> Result<()> {
    let mut loaded = load_graph(cli)?;
    let origin = loaded.resolve_origin(origin)?;
    let target = loaded.last_label()?;

    let graph = &mut loaded.graph;
    let output = DemoOutput {
        origin: &origin,
        breadth_first: graph.traverse_breadth_first(&origin),
        depth_first: graph.traverse_depth_first(&origin),
        breadth_first_tree: tree_and_order(graph, TraversalKind::BreadthFirst, &origin).1,
        depth_first_tree: tree_and_order(graph, TraversalKind::DepthFirst, &origin).1,
        shortest_path: graph.shortest_path(&origin, &target),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Human => {
            let traversals = [
                (TraversalKind::BreadthFirst, "", &output.breadth_first),
                (TraversalKind::DepthFirst, "", &output.depth_first),
                (TraversalKind::BreadthFirst, " TREE", &output.breadth_first_tree),
                (TraversalKind::DepthFirst, " TREE", &output.depth_first_tree),
            ];
            for (kind, suffix, order) in traversals {
                let heading = format!(
                    "{}{} traversal starting at {}",
                    kind.describe(),
                    suffix,
                    origin
                );
                print_labels(cli, &heading, order);
            }
            print_path(cli, &output.shortest_path);
        }
    }

    Ok(())
}

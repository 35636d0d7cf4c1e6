//! `digraph bfs` and `digraph dfs` commands

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::{load_graph, print_labels};
use digraph_core::error::Result;
use digraph_core::format::OutputFormat;
use digraph_core::graph::TraversalKind;

#[derive(Serialize)]
struct TraversalOutput<'a> {
    kind: TraversalKind,
    origin: &'a str,
    order: &'a [String],
}

/// Execute a traversal command
pub fn execute(cli: &Cli, kind: TraversalKind, origin: Option<&str>) -> Result<()> {
    let mut loaded = load_graph(cli)?;
    let origin = loaded.resolve_origin(origin)?;
    let order = loaded.graph.traverse(kind, &origin);

    match cli.format {
        OutputFormat::Json => {
            let output = TraversalOutput {
                kind,
                origin: &origin,
                order: &order,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let heading = format!("{} traversal starting at {}", kind.describe(), origin);
            print_labels(cli, &heading, &order);
        }
    }

    Ok(())
}

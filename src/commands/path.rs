//! `digraph path` command - fewest-edges path between two vertices

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use digraph_core::error::Result;
use digraph_core::format::{join_labels, OutputFormat};
use digraph_core::graph::PathResult;

/// Execute the path command
pub fn execute(cli: &Cli, from: &str, to: &str) -> Result<()> {
    let mut loaded = load_graph(cli)?;
    loaded.require_vertex(from)?;
    loaded.require_vertex(to)?;

    let result = loaded
        .graph
        .shortest_path(&from.to_string(), &to.to_string());
    tracing::debug!(found = result.found, length = result.path_length, "shortest_path");

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print_path(cli, &result),
    }

    Ok(())
}

pub(crate) fn print_path(cli: &Cli, result: &PathResult<String>) {
    match (result.length(), cli.quiet) {
        (Some(_), true) => println!("{}", join_labels(&result.path)),
        (Some(length), false) => println!(
            "Shortest path from {} to {} (length {}): {}",
            result.from,
            result.to,
            length,
            join_labels(&result.path)
        ),
        (None, true) => {}
        (None, false) => println!("No path from {} to {}", result.from, result.to),
    }
}

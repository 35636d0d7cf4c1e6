//! `digraph info` command - graph size and adjacency listing

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use digraph_core::error::Result;
use digraph_core::format::OutputFormat;
use digraph_core::graph::GraphSize;

#[derive(Serialize)]
struct AdjacencyEntry<'a> {
    label: &'a str,
    neighbors: Vec<&'a str>,
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(flatten)]
    size: GraphSize,
    adjacency: Vec<AdjacencyEntry<'a>>,
}

/// Execute the info command
pub fn execute(cli: &Cli) -> Result<()> {
    let loaded = load_graph(cli)?;
    let graph = &loaded.graph;

    let adjacency: Vec<AdjacencyEntry> = graph
        .labels()
        .map(|label| AdjacencyEntry {
            label,
            neighbors: graph
                .neighbors(label)
                .map(|neighbors| neighbors.map(String::as_str).collect())
                .unwrap_or_default(),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = InfoOutput {
                size: graph.size(),
                adjacency,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Vertices: {}", graph.vertex_count());
                println!("Edges: {}", graph.edge_count());
                println!();
            }
            for entry in &adjacency {
                if entry.neighbors.is_empty() {
                    println!("{}", entry.label);
                } else {
                    println!("{} -> {}", entry.label, entry.neighbors.join(" "));
                }
            }
        }
    }

    Ok(())
}

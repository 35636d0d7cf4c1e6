//! `digraph export` command - write the graph definition as TOML

use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use digraph_core::config::GraphConfig;
use digraph_core::error::Result;
use digraph_core::format::OutputFormat;

/// Execute the export command
pub fn execute(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let loaded = load_graph(cli)?;
    let mut config = GraphConfig::from_graph(&loaded.graph);
    config.origin = loaded.config.origin;

    let Some(path) = output else {
        print!("{}", config.to_toml()?);
        return Ok(());
    };

    config.save(path)?;
    tracing::info!(path = %path.display(), "graph exported");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "vertices": config.vertices.len(),
                "edges": config.edges.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

//! Command dispatch logic

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use digraph_core::error::Result;
use digraph_core::graph::TraversalKind;

/// Run the selected subcommand
pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), command = ?cli.command, "dispatch");

    let result = match &cli.command {
        Commands::Demo { origin } => commands::demo::execute(cli, origin.as_deref()),
        Commands::Bfs { origin } => {
            commands::traverse::execute(cli, TraversalKind::BreadthFirst, origin.as_deref())
        }
        Commands::Dfs { origin } => {
            commands::traverse::execute(cli, TraversalKind::DepthFirst, origin.as_deref())
        }
        Commands::Path { from, to } => commands::path::execute(cli, from, to),
        Commands::Tree { origin, kind } => commands::tree::execute(cli, *kind, origin.as_deref()),
        Commands::Info => commands::info::execute(cli),
        Commands::Export { output } => commands::export::execute(cli, output.as_deref()),
    };

    debug!(elapsed = ?start.elapsed(), "command_complete");
    result
}

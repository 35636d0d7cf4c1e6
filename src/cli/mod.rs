//! CLI argument parsing for digraph
//!
//! Supports global flags: --graph, --format, --quiet, --verbose

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use digraph_core::format::OutputFormat;
use digraph_core::graph::TraversalKind;
use parse::{parse_output_format, parse_traversal_kind};

/// Digraph - directed graph traversals, spanning trees and shortest paths
#[derive(Parser, Debug)]
#[command(name = "digraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph definition file (TOML). Defaults to the built-in sample graph
    #[arg(long, global = true, env = "DIGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Print bare results without headings
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "digraph_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every query from the origin and print the results
    Demo {
        /// Start vertex (defaults to the graph's origin)
        origin: Option<String>,
    },

    /// Breadth-first traversal order
    Bfs {
        /// Start vertex (defaults to the graph's origin)
        origin: Option<String>,
    },

    /// Depth-first traversal order
    Dfs {
        /// Start vertex (defaults to the graph's origin)
        origin: Option<String>,
    },

    /// Fewest-edges path between two vertices
    Path {
        /// Start vertex
        from: String,

        /// End vertex
        to: String,
    },

    /// Spanning tree found by BFS or DFS
    Tree {
        /// Start vertex (defaults to the graph's origin)
        origin: Option<String>,

        /// Traversal that builds the tree
        #[arg(long, short, value_parser = parse_traversal_kind, default_value = "bfs")]
        kind: TraversalKind,
    },

    /// Vertex and edge counts with the adjacency listing
    Info,

    /// Write the graph definition as TOML
    Export {
        /// Output file (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

use std::time::Instant;

use crate::cli::Cli;
use digraph_core::config::GraphConfig;
use digraph_core::error::{GraphError, Result};
use digraph_core::format::join_labels;
use digraph_core::graph::{sample_graph, DirectedGraph, SAMPLE_ORIGIN};
use digraph_core::{bail_usage, trace_time};

/// A built graph together with the file it came from
pub struct LoadedGraph {
    pub config: GraphConfig,
    pub graph: DirectedGraph<String>,
}

/// Build the graph named by `--graph`, or the sample graph
pub fn load_graph(cli: &Cli) -> Result<LoadedGraph> {
    let start = Instant::now();
    let (config, graph) = match &cli.graph {
        Some(path) => {
            let config = GraphConfig::load(path)?;
            let graph = config.build()?;
            (config, graph)
        }
        None => {
            let graph = sample_graph()?;
            (GraphConfig::from_graph(&graph).with_origin(SAMPLE_ORIGIN), graph)
        }
    };
    trace_time!(start, "load_graph", vertices = graph.vertex_count());
    Ok(LoadedGraph { config, graph })
}

impl LoadedGraph {
    /// Pick the start vertex: explicit argument, then the file's origin,
    /// then the smallest label
    pub fn resolve_origin(&self, explicit: Option<&str>) -> Result<String> {
        let origin = explicit
            .map(str::to_string)
            .or_else(|| self.config.origin.clone())
            .or_else(|| self.graph.labels().next().cloned());
        let Some(origin) = origin else {
            bail_usage!("graph has no vertices");
        };
        self.require_vertex(&origin)?;
        Ok(origin)
    }

    /// Largest label, the default shortest-path target
    pub fn last_label(&self) -> Result<String> {
        match self.graph.labels().last() {
            Some(label) => Ok(label.clone()),
            None => bail_usage!("graph has no vertices"),
        }
    }

    pub fn require_vertex(&self, label: &str) -> Result<()> {
        if self.graph.contains_vertex(&label.to_string()) {
            Ok(())
        } else {
            Err(GraphError::not_found("vertex", label))
        }
    }
}

/// Print a label sequence under a heading, or bare with `--quiet`
pub fn print_labels(cli: &Cli, heading: &str, labels: &[String]) {
    if cli.quiet {
        println!("{}", join_labels(labels));
    } else {
        println!("{}: {}", heading, join_labels(labels));
    }
}

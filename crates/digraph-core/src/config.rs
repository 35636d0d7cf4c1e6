//! Graph definition files
//!
//! A graph is described in TOML:
//!
//! ```toml
//! version = 1
//! origin = "A"
//! vertices = ["A", "B", "C"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//!
//! [[edges]]
//! from = "B"
//! to = "C"
//! weight = 2.0
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::{sample_graph, DirectedGraph, SAMPLE_ORIGIN};

pub use types::{EdgeConfig, GraphConfig, GRAPH_FORMAT_VERSION};

impl GraphConfig {
    /// Definition of the built-in sample graph, described from [`sample_graph`]
    pub fn sample() -> Result<Self> {
        let graph = sample_graph::<String>()?;
        Ok(Self::from_graph(&graph).with_origin(SAMPLE_ORIGIN))
    }

    /// Set the default origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Describe an existing graph
    pub fn from_graph(graph: &DirectedGraph<String>) -> Self {
        GraphConfig {
            version: GRAPH_FORMAT_VERSION,
            origin: None,
            vertices: graph.labels().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, edge)| EdgeConfig {
                    from: from.clone(),
                    to: edge.destination().clone(),
                    weight: edge.weight(),
                })
                .collect(),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        if config.version != GRAPH_FORMAT_VERSION {
            bail_invalid!(
                "graph file version",
                format!("{} (supported: {})", config.version, GRAPH_FORMAT_VERSION)
            );
        }
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::TomlSer(e.to_string()))
    }

    /// Build the described graph.
    ///
    /// Every edge endpoint must be a declared vertex. Duplicate vertices,
    /// duplicate edges and self-loops are skipped with a warning.
    #[tracing::instrument(
        skip(self),
        fields(vertices = self.vertices.len(), edges = self.edges.len())
    )]
    pub fn build(&self) -> Result<DirectedGraph<String>> {
        let mut graph = DirectedGraph::new();
        for label in &self.vertices {
            if !graph.add_vertex(label.clone())? {
                tracing::warn!(label = %label, "duplicate vertex in graph file");
            }
        }

        if let Some(origin) = &self.origin {
            if !graph.contains_vertex(origin) {
                return Err(GraphError::not_found("origin vertex", origin));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !graph.contains_vertex(endpoint) {
                    return Err(GraphError::not_found("vertex", endpoint));
                }
            }
            if !graph.add_weighted_edge(&edge.from, &edge.to, edge.weight) {
                tracing::warn!(
                    from = %edge.from,
                    to = %edge.to,
                    "skipping duplicate edge or self-loop"
                );
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }
}

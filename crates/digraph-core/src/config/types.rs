use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_EDGE_WEIGHT;

/// Current graph file format version
pub const GRAPH_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    GRAPH_FORMAT_VERSION
}

fn default_weight() -> f64 {
    DEFAULT_EDGE_WEIGHT
}

fn is_default_weight(weight: &f64) -> bool {
    *weight == DEFAULT_EDGE_WEIGHT
}

/// Graph definition file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default origin for queries that take one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Vertex labels
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Directed edges, in insertion order
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            version: GRAPH_FORMAT_VERSION,
            origin: None,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// One `[[edges]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight", skip_serializing_if = "is_default_weight")]
    pub weight: f64,
}

impl EdgeConfig {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        EdgeConfig {
            from: from.into(),
            to: to.into(),
            weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

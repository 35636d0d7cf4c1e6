use serde::Serialize;

use crate::error::GraphError;

/// Weight given to edges added without an explicit weight
pub const DEFAULT_EDGE_WEIGHT: f64 = 0.0;

/// Accumulated cost of reaching a vertex during a query.
/// Unweighted queries add one per edge, so the value is a hop count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct PathCost(f64);

impl PathCost {
    pub const ZERO: PathCost = PathCost(0.0);
    pub const HOP: PathCost = PathCost(1.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_hops(&self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add for PathCost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PathCost(self.0 + other.0)
    }
}

impl From<u32> for PathCost {
    fn from(hops: u32) -> Self {
        PathCost(hops as f64)
    }
}

/// Which frontier drives a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraversalKind {
    /// Queue frontier, level order
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// Stack frontier, mark-on-pop
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl TraversalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::BreadthFirst => "bfs",
            TraversalKind::DepthFirst => "dfs",
        }
    }

    /// Human-readable name, e.g. for "Breadth-first traversal starting at A"
    pub fn describe(&self) -> &'static str {
        match self {
            TraversalKind::BreadthFirst => "Breadth-first",
            TraversalKind::DepthFirst => "Depth-first",
        }
    }
}

impl std::fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TraversalKind {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(TraversalKind::BreadthFirst),
            "dfs" | "depth-first" => Ok(TraversalKind::DepthFirst),
            other => Err(GraphError::UsageError(format!(
                "unknown traversal kind '{}' (expected: bfs, dfs)",
                other
            ))),
        }
    }
}

/// Vertex and edge counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSize {
    pub vertices: usize,
    pub edges: usize,
}

/// Result of an unweighted shortest-path query.
///
/// `found == false` is the "no path" sentinel: `path` is empty and
/// `path_length` is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<L> {
    pub from: L,
    pub to: L,
    pub found: bool,
    pub path_length: usize,
    pub path: Vec<L>,
}

impl<L> PathResult<L> {
    pub(crate) fn not_found(from: L, to: L) -> Self {
        PathResult {
            from,
            to,
            found: false,
            path_length: 0,
            path: Vec::new(),
        }
    }

    /// Edge count of the path, or `None` when no path exists
    pub fn length(&self) -> Option<usize> {
        self.found.then_some(self.path_length)
    }
}

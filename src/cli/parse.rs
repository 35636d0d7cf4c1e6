use digraph_core::error::GraphError;
use digraph_core::format::OutputFormat;
use digraph_core::graph::TraversalKind;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> Result<OutputFormat, GraphError> {
    s.parse()
}

/// Parse traversal kind from string
pub fn parse_traversal_kind(s: &str) -> Result<TraversalKind, GraphError> {
    s.parse()
}

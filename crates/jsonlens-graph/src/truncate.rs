//! Node-count capping for oversized documents.

use std::collections::HashSet;

use crate::types::Graph;

/// Keeps the first `max_nodes` nodes in layout order and drops every edge
/// whose endpoints are no longer both present. Returns the number of nodes
/// removed.
pub fn truncate(graph: &mut Graph, max_nodes: usize) -> usize {
    if graph.nodes.len() <= max_nodes {
        return 0;
    }
    let dropped = graph.nodes.len() - max_nodes;
    graph.nodes.truncate(max_nodes);
    let kept: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    graph
        .edges
        .retain(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()));
    dropped
}

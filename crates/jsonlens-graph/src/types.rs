//! Graph data model and layout geometry.

use jsonlens_json_type::ValueKind;

/// Rendered node width in pixels; child columns start one width plus one
/// horizontal gap to the right of their parent.
pub const NODE_WIDTH: f64 = 250.0;
pub const NODE_HEIGHT_BASE: f64 = 40.0;
pub const NODE_HEIGHT_PER_FIELD: f64 = 28.0;
pub const HORIZONTAL_GAP: f64 = 80.0;
pub const VERTICAL_GAP: f64 = 30.0;

/// Default node cap applied by callers before rendering.
pub const MAX_GRAPH_NODES: usize = 1000;

/// Hard ceiling on layout recursion. Containers at this depth render as
/// collapsed leaves instead of descending further.
pub const MAX_DEPTH: usize = 512;

/// One primitive-valued field shown inline on an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub key: String,
    pub display: String,
    pub kind: ValueKind,
}

/// What a node represents.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A primitive leaf.
    Value { display: String, kind: ValueKind },
    /// An array; each element becomes a child node.
    Array { item_count: usize },
    /// An object; primitive fields are inline entries, complex fields become
    /// child nodes.
    Object { entries: Vec<FieldEntry> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    /// Path of the JSON location this node represents, in the addressing
    /// grammar, enabling write-back from node edits.
    pub json_path: String,
    pub has_children: bool,
    /// Number of graph nodes beneath this one.
    pub descendant_count: usize,
    /// Approximate serialized byte size of the subtree rooted here.
    pub approx_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The flattened layout result. Nodes appear in build (preorder) order; the
/// root is first and every non-root node has exactly one inbound edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

//! Recursive layered layout.
//!
//! A node's `x` is its parent's `x` plus one node width and one horizontal
//! gap; its `y` starts at the parent's `y`, and each subsequent sibling is
//! stacked below the previous sibling's subtree height plus a vertical gap.
//! Node ids come from a counter owned by a single build, so ids are stable
//! within one layout and meaningless across layouts.

use jsonlens_json_path::is_simple_key;
use jsonlens_json_type::{is_primitive, value_display};
use serde_json::Value;

use crate::types::{
    FieldEntry, Graph, GraphEdge, GraphNode, NodeKind, HORIZONTAL_GAP, MAX_DEPTH,
    NODE_HEIGHT_BASE, NODE_HEIGHT_PER_FIELD, NODE_WIDTH, VERTICAL_GAP,
};

/// Bottom-up accumulation carried out of each recursive call.
struct Subtree {
    height: f64,
    /// Graph nodes in the subtree, this node included.
    node_count: usize,
    /// Approximate serialized bytes of the JSON subtree.
    size: usize,
}

fn scalar_size(value: &Value) -> usize {
    match value {
        Value::Null => 4,
        Value::Bool(b) => {
            if *b {
                4
            } else {
                5
            }
        }
        Value::Number(n) => n.to_string().len(),
        Value::String(s) => s.len() + 2,
        _ => 0,
    }
}

#[derive(Default)]
struct Builder {
    next_id: usize,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl Builder {
    fn alloc_id(&mut self) -> String {
        let id = format!("node-{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn add_edge(&mut self, parent: Option<&str>, node_id: &str) {
        if let Some(parent_id) = parent {
            self.edges.push(GraphEdge {
                id: format!("edge-{parent_id}-{node_id}"),
                source: parent_id.to_string(),
                target: node_id.to_string(),
            });
        }
    }

    fn build(
        &mut self,
        data: &Value,
        label: &str,
        parent: Option<&str>,
        x: f64,
        y: f64,
        json_path: &str,
        depth: usize,
    ) -> Subtree {
        let node_id = self.alloc_id();
        self.add_edge(parent, &node_id);

        if is_primitive(data) || depth >= MAX_DEPTH {
            let (display, kind) = value_display(data);
            let size = scalar_size(data);
            self.nodes.push(GraphNode {
                id: node_id,
                label: label.to_string(),
                kind: NodeKind::Value { display, kind },
                x,
                y,
                json_path: json_path.to_string(),
                has_children: false,
                descendant_count: 0,
                approx_size: size,
            });
            return Subtree {
                height: NODE_HEIGHT_BASE + NODE_HEIGHT_PER_FIELD,
                node_count: 1,
                size,
            };
        }

        match data {
            Value::Array(arr) => {
                self.nodes.push(GraphNode {
                    id: node_id.clone(),
                    label: label.to_string(),
                    kind: NodeKind::Array {
                        item_count: arr.len(),
                    },
                    x,
                    y,
                    json_path: json_path.to_string(),
                    has_children: !arr.is_empty(),
                    descendant_count: 0,
                    approx_size: 0,
                });
                let slot = self.nodes.len() - 1;

                let child_x = x + NODE_WIDTH + HORIZONTAL_GAP;
                let mut child_y = y;
                let mut descendants = 0;
                let mut size = 2 + arr.len().saturating_sub(1);
                for (i, item) in arr.iter().enumerate() {
                    let child_path = format!("{json_path}[{i}]");
                    let child_label = format!("[{i}]");
                    let sub = self.build(
                        item,
                        &child_label,
                        Some(&node_id),
                        child_x,
                        child_y,
                        &child_path,
                        depth + 1,
                    );
                    child_y += sub.height + VERTICAL_GAP;
                    descendants += sub.node_count;
                    size += sub.size;
                }

                self.nodes[slot].descendant_count = descendants;
                self.nodes[slot].approx_size = size;
                Subtree {
                    height: (NODE_HEIGHT_BASE + NODE_HEIGHT_PER_FIELD).max(child_y - y),
                    node_count: descendants + 1,
                    size,
                }
            }
            Value::Object(map) => {
                let mut entries = Vec::new();
                let mut complex: Vec<(&String, &Value, String)> = Vec::new();
                let mut size = 2 + map.len().saturating_sub(1);
                for (key, value) in map {
                    size += key.len() + 3;
                    if is_primitive(value) {
                        let (display, kind) = value_display(value);
                        size += scalar_size(value);
                        entries.push(FieldEntry {
                            key: key.clone(),
                            display,
                            kind,
                        });
                    } else {
                        let child_path = if is_simple_key(key) {
                            format!("{json_path}.{key}")
                        } else {
                            format!("{json_path}[\"{key}\"]")
                        };
                        complex.push((key, value, child_path));
                    }
                }

                let node_height =
                    NODE_HEIGHT_BASE + entries.len() as f64 * NODE_HEIGHT_PER_FIELD;
                self.nodes.push(GraphNode {
                    id: node_id.clone(),
                    label: label.to_string(),
                    kind: NodeKind::Object { entries },
                    x,
                    y,
                    json_path: json_path.to_string(),
                    has_children: !complex.is_empty(),
                    descendant_count: 0,
                    approx_size: 0,
                });
                let slot = self.nodes.len() - 1;

                let child_x = x + NODE_WIDTH + HORIZONTAL_GAP;
                let mut child_y = y;
                let mut descendants = 0;
                for (key, value, child_path) in complex {
                    let sub = self.build(
                        value,
                        key,
                        Some(&node_id),
                        child_x,
                        child_y,
                        &child_path,
                        depth + 1,
                    );
                    child_y += sub.height + VERTICAL_GAP;
                    descendants += sub.node_count;
                    size += sub.size;
                }

                self.nodes[slot].descendant_count = descendants;
                self.nodes[slot].approx_size = size;
                Subtree {
                    height: node_height.max(child_y - y),
                    node_count: descendants + 1,
                    size,
                }
            }
            _ => unreachable!("primitives handled above"),
        }
    }
}

/// Lays out `data` as a positioned node/edge graph rooted at `$`.
pub fn json_to_graph(data: &Value, root_label: &str) -> Graph {
    let mut builder = Builder::default();
    builder.build(data, root_label, None, 0.0, 0.0, "$", 0);
    Graph {
        nodes: builder.nodes,
        edges: builder.edges,
    }
}

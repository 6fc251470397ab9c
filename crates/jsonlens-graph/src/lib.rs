//! Positioned node/edge graph layout for JSON documents.
//!
//! [`json_to_graph`] walks a [`serde_json::Value`] and produces a [`Graph`]
//! whose nodes carry absolute coordinates for a left-to-right layered layout.
//! Each object node inlines its primitive fields as rows; arrays and nested
//! objects become child nodes connected by edges. [`truncate`] caps the node
//! count for very large documents.
//!
//! ```
//! use serde_json::json;
//! use jsonlens_graph::json_to_graph;
//!
//! let graph = json_to_graph(&json!({"name": "Ada", "tags": ["a", "b"]}), "root");
//! assert_eq!(graph.nodes[0].id, "node-0");
//! assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
//! ```

mod build;
mod truncate;
mod types;

pub use build::json_to_graph;
pub use truncate::truncate;
pub use types::{
    FieldEntry, Graph, GraphEdge, GraphNode, NodeKind, HORIZONTAL_GAP, MAX_DEPTH,
    MAX_GRAPH_NODES, NODE_HEIGHT_BASE, NODE_HEIGHT_PER_FIELD, NODE_WIDTH, VERTICAL_GAP,
};

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlens_json_type::ValueKind;
    use serde_json::json;

    #[test]
    fn scalar_document_is_a_single_value_node() {
        let graph = json_to_graph(&json!(42), "root");
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        let node = &graph.nodes[0];
        assert_eq!(node.id, "node-0");
        assert_eq!(node.label, "root");
        assert_eq!(node.json_path, "$");
        assert!(!node.has_children);
        assert_eq!(node.descendant_count, 0);
        match &node.kind {
            NodeKind::Value { display, kind } => {
                assert_eq!(display, "42");
                assert_eq!(*kind, ValueKind::Number);
            }
            other => panic!("expected value node, got {other:?}"),
        }
    }

    #[test]
    fn object_inlines_primitive_fields() {
        let graph = json_to_graph(&json!({"name": "Ada", "age": 36}), "root");
        assert_eq!(graph.nodes.len(), 1);
        match &graph.nodes[0].kind {
            NodeKind::Object { entries } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].key, "name");
                assert_eq!(entries[0].display, "\"Ada\"");
                assert_eq!(entries[0].kind, ValueKind::String);
                assert_eq!(entries[1].key, "age");
                assert_eq!(entries[1].kind, ValueKind::Number);
            }
            other => panic!("expected object node, got {other:?}"),
        }
        assert!(!graph.nodes[0].has_children);
    }

    #[test]
    fn nested_containers_become_child_nodes() {
        let graph = json_to_graph(
            &json!({"name": "Ada", "address": {"city": "London"}, "tags": ["x"]}),
            "root",
        );
        assert_eq!(graph.nodes.len(), 4); // root, address, tags, tags[0]
        assert!(graph.nodes[0].has_children);
        assert_eq!(graph.nodes[0].descendant_count, 3);

        let address = graph.nodes.iter().find(|n| n.label == "address").unwrap();
        assert_eq!(address.json_path, "$.address");
        let tags = graph.nodes.iter().find(|n| n.label == "tags").unwrap();
        assert_eq!(tags.json_path, "$.tags");
        match tags.kind {
            NodeKind::Array { item_count } => assert_eq!(item_count, 1),
            _ => panic!("expected array node"),
        }
        let item = graph.nodes.iter().find(|n| n.label == "[0]").unwrap();
        assert_eq!(item.json_path, "$.tags[0]");
    }

    #[test]
    fn keys_needing_quoting_get_bracket_paths() {
        let graph = json_to_graph(&json!({"odd key": {"a": 1}}), "root");
        let child = graph.nodes.iter().find(|n| n.label == "odd key").unwrap();
        assert_eq!(child.json_path, "$[\"odd key\"]");
    }

    #[test]
    fn every_non_root_node_has_exactly_one_inbound_edge() {
        let graph = json_to_graph(
            &json!({"a": [{"b": 1}, {"b": 2}], "c": {"d": [1, 2, 3]}}),
            "root",
        );
        assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
        for node in &graph.nodes[1..] {
            let inbound = graph.edges.iter().filter(|e| e.target == node.id).count();
            assert_eq!(inbound, 1, "node {} inbound edges", node.id);
        }
        // Edge ids name both endpoints.
        let edge = &graph.edges[0];
        assert_eq!(edge.id, format!("edge-{}-{}", edge.source, edge.target));
    }

    #[test]
    fn children_sit_one_column_to_the_right() {
        let graph = json_to_graph(&json!({"a": {"x": 1}, "b": {"y": 2}}), "root");
        let root = &graph.nodes[0];
        let a = graph.nodes.iter().find(|n| n.label == "a").unwrap();
        let b = graph.nodes.iter().find(|n| n.label == "b").unwrap();
        assert_eq!(a.x, root.x + NODE_WIDTH + HORIZONTAL_GAP);
        assert_eq!(b.x, a.x);
        assert_eq!(a.y, root.y);
        assert!(b.y > a.y);
    }

    #[test]
    fn sibling_spacing_accounts_for_subtree_height() {
        // First child has its own child column, so it is taller than a leaf.
        let graph = json_to_graph(
            &json!({"a": {"inner": {"deep": [1, 2, 3, 4]}}, "b": {"y": 2}}),
            "root",
        );
        let a = graph.nodes.iter().find(|n| n.label == "a").unwrap();
        let b = graph.nodes.iter().find(|n| n.label == "b").unwrap();
        let leaf_height = NODE_HEIGHT_BASE + NODE_HEIGHT_PER_FIELD;
        assert!(b.y - a.y > leaf_height + VERTICAL_GAP);
    }

    #[test]
    fn array_of_objects_uses_index_labels() {
        let graph = json_to_graph(&json!([{"id": 1}, {"id": 2}]), "items");
        assert_eq!(graph.nodes[0].label, "items");
        assert_eq!(graph.nodes[1].label, "[0]");
        assert_eq!(graph.nodes[2].label, "[1]");
        assert_eq!(graph.nodes[1].json_path, "$[0]");
    }

    #[test]
    fn descendant_count_and_size_accumulate() {
        let data = json!({"users": [{"name": "Ada"}, {"name": "Alan"}]});
        let graph = json_to_graph(&data, "root");
        let root = &graph.nodes[0];
        assert_eq!(root.descendant_count, 3); // users, [0], [1]
        let serialized = serde_json::to_string(&data).unwrap().len();
        // Approximate size tracks the compact serialization closely.
        let delta = root.approx_size.abs_diff(serialized);
        assert!(delta <= 4, "approx {} vs actual {}", root.approx_size, serialized);
    }

    #[test]
    fn truncate_drops_tail_nodes_and_dangling_edges() {
        let items: Vec<_> = (0..20).map(|i| json!({"i": i})).collect();
        let mut graph = json_to_graph(&json!(items), "root");
        assert_eq!(graph.nodes.len(), 21);
        let dropped = truncate(&mut graph, 5);
        assert_eq!(dropped, 16);
        assert_eq!(graph.nodes.len(), 5);
        for edge in &graph.edges {
            assert!(graph.nodes.iter().any(|n| n.id == edge.source));
            assert!(graph.nodes.iter().any(|n| n.id == edge.target));
        }
        assert_eq!(graph.edges.len(), 4);
    }

    #[test]
    fn over_deep_containers_collapse_into_leaves() {
        let mut value = json!(1);
        for _ in 0..MAX_DEPTH + 40 {
            value = serde_json::Value::Array(vec![value]);
        }
        let graph = json_to_graph(&value, "root");
        // One array node per level up to the ceiling, then a collapsed leaf.
        assert_eq!(graph.nodes.len(), MAX_DEPTH + 1);
        let last = graph.nodes.last().unwrap();
        assert!(!last.has_children);
        match &last.kind {
            NodeKind::Value { display, kind } => {
                assert_eq!(display, "Array(1)");
                assert_eq!(*kind, ValueKind::Array);
            }
            other => panic!("expected collapsed leaf, got {other:?}"),
        }
    }

    #[test]
    fn truncate_is_a_noop_under_the_cap() {
        let mut graph = json_to_graph(&json!({"a": 1}), "root");
        assert_eq!(truncate(&mut graph, MAX_GRAPH_NODES), 0);
        assert_eq!(graph.nodes.len(), 1);
    }
}

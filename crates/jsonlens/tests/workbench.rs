//! End-to-end flows through the workbench: edit, transform, project into
//! the export formats.

use jsonlens::csv::json_to_csv;
use jsonlens::runner::{run_transform, run_transform_with_timeout};
use jsonlens::store::DocumentStore;
use jsonlens::table::{find_array_paths, get_columns, get_flattened};
use jsonlens_graph::json_to_graph;
use jsonlens_json_type::{json_to_typescript, json_to_zod};
use serde_json::json;
use std::time::Duration;

#[test]
fn transform_then_export_csv() {
    let mut store = DocumentStore::new();
    store.run_transform();
    let csv = json_to_csv(&store.transformed_json).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,name,age,role"));
    assert_eq!(lines.next(), Some("1,Alice,30,admin"));
    assert_eq!(lines.next(), Some("4,Diana,28,admin"));
    assert_eq!(lines.next(), None);
}

#[test]
fn transform_output_feeds_type_inference() {
    let mut store = DocumentStore::new();
    store.run_transform();
    let types = json_to_typescript(&store.transformed_json, &store.root_name);
    assert!(types.contains("type rootItem = {"));
    assert!(types.contains("id: number;"));
    assert!(types.contains("role: string;"));
    assert!(types.ends_with("type root = rootItem[];"));

    let schema = json_to_zod(&store.transformed_json, &store.root_name);
    assert!(schema.starts_with("import { z } from \"zod\";"));
    assert!(schema.contains("z.number().int()"));
}

#[test]
fn structural_edits_round_trip_through_the_editor_text() {
    let mut store = DocumentStore::new();
    store.rename_key_at_path("$.users[1].name", "firstName");
    store.update_value_at_path("$.users[1].firstName", json!("Robert"));
    store.delete_at_path("$.users[2]");

    // The editor text re-parses to exactly the edited document.
    let reparsed: serde_json::Value = serde_json::from_str(&store.json_input).unwrap();
    assert_eq!(reparsed, store.parsed_json);
    assert_eq!(store.parsed_json["users"][1]["firstName"], json!("Robert"));
    assert_eq!(store.parsed_json["users"].as_array().unwrap().len(), 3);
    assert_eq!(store.parsed_json["users"][2]["name"], json!("Diana"));
}

#[test]
fn edited_document_lays_out_as_a_graph() {
    let mut store = DocumentStore::new();
    store.bulk_delete_key("age");
    let graph = json_to_graph(&store.parsed_json, &store.root_name);
    // root, users, 4 user nodes, metadata.
    assert_eq!(graph.nodes.len(), 7);
    assert_eq!(graph.edges.len(), 6);
    let users = graph.nodes.iter().find(|n| n.label == "users").unwrap();
    assert_eq!(users.descendant_count, 4);
}

#[test]
fn table_view_discovers_and_flattens_the_sample() {
    let store = DocumentStore::new();
    let paths = find_array_paths(&store.parsed_json);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].path, "$.users");
    assert_eq!(paths[0].length, 4);

    let rows = get_flattened(&store.parsed_json, &paths[0].path).unwrap();
    let rows = rows.as_array().unwrap().clone();
    assert_eq!(get_columns(&rows), vec!["id", "name", "age", "role"]);
    assert_eq!(
        get_flattened(&store.parsed_json, "$.users[*].name"),
        Some(json!(["Alice", "Bob", "Charlie", "Diana"]))
    );
}

#[test]
fn a_superseded_slow_run_does_not_clobber_a_fast_one() {
    let mut store = DocumentStore::new();

    let slow_generation = store.begin_run();
    let fast_generation = store.begin_run();

    let fast = run_transform(r#"["$", "$.metadata.total"]"#, &store.parsed_json);
    store.apply_transform_outcome(fast_generation, fast);
    assert_eq!(store.transformed_json, json!(4));

    let slow = run_transform(r#"["$", "$.metadata.page"]"#, &store.parsed_json);
    store.apply_transform_outcome(slow_generation, slow);
    assert_eq!(store.transformed_json, json!(4));
    assert_eq!(store.history.len(), 1);
}

#[test]
fn timeout_reports_and_preserves_prior_output() {
    let mut store = DocumentStore::new();
    store.run_transform();
    let good = store.transformed_json.clone();

    let generation = store.begin_run();
    let outcome = run_transform_with_timeout(
        &store.transform_code,
        &store.parsed_json,
        Duration::ZERO,
    );
    store.apply_transform_outcome(generation, outcome);

    assert!(store.transform_error.is_some());
    assert_eq!(store.transformed_json, good);
}

#[test]
fn console_logs_surface_through_the_store() {
    let mut store = DocumentStore::new();
    store.set_transform_code(
        r#"["if", ["console.log", "users:", ["$", "$.metadata.total"]], 1, ["$", "$.users"]]"#,
    );
    store.run_transform();
    assert_eq!(store.console_logs.len(), 1);
    assert_eq!(store.console_logs[0].message(), "users: 4");

    store.clear_console_logs();
    assert!(store.console_logs.is_empty());
}

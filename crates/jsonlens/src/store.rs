//! Document/session state and its transitions.
//!
//! The store is the single owner of the workbench state: the raw editor
//! text, the last good parsed document, the transform program, the last
//! transform output, and a bounded undo history for transform runs.
//! Structural edits always flow through the immutable path operations and
//! re-serialize the document, so `json_input` and `parsed_json` can never
//! disagree after an edit.

use crate::runner::{run_transform, TransformOutcome};
use crate::sample::{sample_document, sample_json_text, SAMPLE_TRANSFORM};
use jsonlens_expression::ConsoleEntry;
use jsonlens_json_path::{
    add_entry, bulk_delete_key, bulk_rename_key, delete_value, rename_key, set_value,
};
use serde_json::Value;
use std::borrow::Cow;

/// Most recent transform runs kept for `revert`.
pub const HISTORY_LIMIT: usize = 50;

/// One undoable transform run: the output and code as they were *before*
/// the run.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub transformed_json: Value,
    pub transform_code: String,
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Raw editor text; may be invalid JSON while the user types.
    pub json_input: String,
    /// Last good parse of `json_input`.
    pub parsed_json: Value,
    pub json_error: Option<String>,
    pub transform_code: String,
    pub transform_error: Option<String>,
    /// Last good transform output (or the parsed document if none ran).
    pub transformed_json: Value,
    pub history: Vec<HistoryEntry>,
    /// Name used as the root type/schema identifier by the emitters.
    pub root_name: String,
    pub console_logs: Vec<ConsoleEntry>,
    /// Monotonic run counter; a finished run is applied only if no newer
    /// run was requested meanwhile.
    pub run_generation: u64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        let parsed = sample_document();
        DocumentStore {
            json_input: sample_json_text(),
            transformed_json: parsed.clone(),
            parsed_json: parsed,
            json_error: None,
            transform_code: SAMPLE_TRANSFORM.to_string(),
            transform_error: None,
            history: Vec::new(),
            root_name: "root".to_string(),
            console_logs: Vec::new(),
            run_generation: 0,
        }
    }

    /// Replaces the editor text. A parse failure keeps the previous good
    /// document active and surfaces the parser's message.
    pub fn set_json_input(&mut self, text: &str) {
        self.json_input = text.to_string();
        match serde_json::from_str::<Value>(text) {
            Ok(parsed) => {
                self.parsed_json = parsed.clone();
                self.transformed_json = parsed;
                self.json_error = None;
                self.transform_error = None;
            }
            Err(e) => {
                self.json_error = Some(e.to_string());
            }
        }
    }

    pub fn set_transform_code(&mut self, code: &str) {
        self.transform_code = code.to_string();
    }

    pub fn set_root_name(&mut self, name: &str) {
        self.root_name = name.to_string();
    }

    pub fn clear_console_logs(&mut self) {
        self.console_logs.clear();
    }

    /// Requests a run and returns its generation token. The caller hands the
    /// token back with the outcome so a superseded run cannot clobber a
    /// newer one.
    pub fn begin_run(&mut self) -> u64 {
        self.run_generation += 1;
        self.run_generation
    }

    /// Applies a finished run's outcome. A stale generation is discarded.
    pub fn apply_transform_outcome(&mut self, generation: u64, outcome: TransformOutcome) {
        if generation != self.run_generation {
            return;
        }
        self.console_logs = outcome.logs;
        match (outcome.result, outcome.error) {
            (Some(result), _) => {
                self.history.push(HistoryEntry {
                    transformed_json: self.transformed_json.clone(),
                    transform_code: self.transform_code.clone(),
                });
                let excess = self.history.len().saturating_sub(HISTORY_LIMIT);
                if excess > 0 {
                    self.history.drain(..excess);
                }
                self.transformed_json = result;
                self.transform_error = None;
            }
            (None, error) => {
                // Last good output stays visible next to the error.
                self.transform_error =
                    Some(error.unwrap_or_else(|| "Transform execution failed".to_string()));
            }
        }
    }

    /// Runs the current transform synchronously. Refuses while the input is
    /// invalid JSON.
    pub fn run_transform(&mut self) {
        if self.json_error.is_some() {
            return;
        }
        let generation = self.begin_run();
        let outcome = run_transform(&self.transform_code, &self.parsed_json);
        self.apply_transform_outcome(generation, outcome);
    }

    /// Undoes the most recent successful run.
    pub fn revert(&mut self) {
        let Some(entry) = self.history.pop() else {
            return;
        };
        self.transformed_json = entry.transformed_json;
        self.transform_code = entry.transform_code;
        self.transform_error = None;
    }

    /// Restores the initial sample state.
    pub fn reset(&mut self) {
        *self = DocumentStore::new();
    }

    // ── Structural edits ────────────────────────────────────────────────

    /// Writes the edited document back into every slot that mirrors it.
    /// This intentionally discards the last transform output; an edit makes
    /// the edited document the thing on display.
    fn commit(&mut self, updated: Value) {
        self.json_input = serde_json::to_string_pretty(&updated).unwrap_or_default();
        self.transformed_json = updated.clone();
        self.parsed_json = updated;
        self.json_error = None;
        self.transform_error = None;
    }

    pub fn update_value_at_path(&mut self, path: &str, value: Value) {
        let updated = set_value(&self.parsed_json, path, value);
        self.commit(updated);
    }

    pub fn delete_at_path(&mut self, path: &str) {
        match delete_value(&self.parsed_json, path) {
            Some(updated) => self.commit(updated),
            // Deleting the root empties the document.
            None => self.commit(Value::Null),
        }
    }

    pub fn rename_key_at_path(&mut self, path: &str, new_key: &str) {
        let updated = rename_key(&self.parsed_json, path, new_key);
        self.commit(updated);
    }

    pub fn add_at_path(&mut self, path: &str, key: &str, value: Value) {
        let updated = add_entry(&self.parsed_json, path, key, value);
        self.commit(updated);
    }

    pub fn bulk_rename_key(&mut self, old_key: &str, new_key: &str) {
        let updated = match bulk_rename_key(&self.parsed_json, old_key, new_key) {
            // Identity rename; skip the re-serialization round trip.
            Cow::Borrowed(_) => return,
            Cow::Owned(updated) => updated,
        };
        self.commit(updated);
    }

    pub fn bulk_delete_key(&mut self, key: &str) {
        let updated = bulk_delete_key(&self.parsed_json, key);
        self.commit(updated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_on_the_sample_document() {
        let store = DocumentStore::new();
        assert_eq!(store.json_error, None);
        assert_eq!(store.parsed_json["users"][0]["name"], json!("Alice"));
        assert_eq!(store.transformed_json, store.parsed_json);
        assert_eq!(store.transform_code, SAMPLE_TRANSFORM);
        assert!(store.history.is_empty());
    }

    #[test]
    fn invalid_input_keeps_the_previous_document() {
        let mut store = DocumentStore::new();
        let before = store.parsed_json.clone();
        store.set_json_input("{ not json");
        assert_eq!(store.json_input, "{ not json");
        assert!(store.json_error.is_some());
        assert_eq!(store.parsed_json, before);
        assert_eq!(store.transformed_json, before);
    }

    #[test]
    fn valid_input_replaces_document_and_clears_errors() {
        let mut store = DocumentStore::new();
        store.set_json_input("{ not json");
        store.set_json_input(r#"{"a": 1}"#);
        assert_eq!(store.json_error, None);
        assert_eq!(store.parsed_json, json!({"a": 1}));
        assert_eq!(store.transformed_json, json!({"a": 1}));
    }

    #[test]
    fn sample_transform_filters_admins() {
        let mut store = DocumentStore::new();
        store.run_transform();
        assert_eq!(store.transform_error, None);
        assert_eq!(
            store.transformed_json,
            json!([
                { "id": 1, "name": "Alice", "age": 30, "role": "admin" },
                { "id": 4, "name": "Diana", "age": 28, "role": "admin" }
            ])
        );
        assert_eq!(store.history.len(), 1);
    }

    #[test]
    fn run_is_refused_while_input_is_invalid() {
        let mut store = DocumentStore::new();
        store.set_json_input("{ broken");
        let before = store.transformed_json.clone();
        store.run_transform();
        assert_eq!(store.transformed_json, before);
        assert!(store.history.is_empty());
    }

    #[test]
    fn failed_run_keeps_last_good_output() {
        let mut store = DocumentStore::new();
        store.run_transform();
        let good = store.transformed_json.clone();
        store.set_transform_code(r#"["/", 1, 0]"#);
        store.run_transform();
        assert_eq!(store.transformed_json, good);
        assert!(store.transform_error.is_some());
        // The failed run did not add an undo entry.
        assert_eq!(store.history.len(), 1);
    }

    #[test]
    fn revert_restores_output_and_code() {
        let mut store = DocumentStore::new();
        store.run_transform();
        let admins = store.transformed_json.clone();
        store.set_transform_code(r#"["$", "$.metadata"]"#);
        store.run_transform();
        assert_eq!(store.transformed_json, json!({"total": 4, "page": 1, "perPage": 10}));

        // Each entry holds the state from just before its run.
        store.revert();
        assert_eq!(store.transformed_json, admins);
        assert_eq!(store.transform_code, r#"["$", "$.metadata"]"#);

        store.revert();
        assert_eq!(store.transformed_json, store.parsed_json);
        assert_eq!(store.transform_code, SAMPLE_TRANSFORM);
        assert!(store.history.is_empty());

        // Reverting with no history is a no-op.
        store.revert();
        assert!(store.history.is_empty());
    }

    #[test]
    fn history_is_capped() {
        let mut store = DocumentStore::new();
        store.set_transform_code(r#"["$", "$.metadata.total"]"#);
        for _ in 0..(HISTORY_LIMIT + 10) {
            store.run_transform();
        }
        assert_eq!(store.history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut store = DocumentStore::new();
        let stale = store.begin_run();
        let _newer = store.begin_run();
        let outcome = TransformOutcome {
            result: Some(json!("stale")),
            error: None,
            logs: Vec::new(),
        };
        store.apply_transform_outcome(stale, outcome);
        assert_ne!(store.transformed_json, json!("stale"));
        assert!(store.history.is_empty());
    }

    #[test]
    fn structural_edit_updates_every_mirror() {
        let mut store = DocumentStore::new();
        store.run_transform();
        store.update_value_at_path("$.users[0].age", json!(31));
        assert_eq!(store.parsed_json["users"][0]["age"], json!(31));
        assert_eq!(store.transformed_json, store.parsed_json);
        assert!(store.json_input.contains("\"age\": 31"));
        assert_eq!(store.transform_error, None);
    }

    #[test]
    fn delete_and_rename_and_add() {
        let mut store = DocumentStore::new();
        store.delete_at_path("$.metadata.perPage");
        assert_eq!(store.parsed_json["metadata"], json!({"total": 4, "page": 1}));

        store.rename_key_at_path("$.metadata.total", "count");
        assert_eq!(store.parsed_json["metadata"], json!({"count": 4, "page": 1}));

        store.add_at_path("$.metadata", "source", json!("sample"));
        assert_eq!(store.parsed_json["metadata"]["source"], json!("sample"));

        store.add_at_path("$.users", "", json!({"id": 5, "name": "Eve"}));
        assert_eq!(store.parsed_json["users"][4]["name"], json!("Eve"));
    }

    #[test]
    fn bulk_rename_skips_commit_on_identity_rename() {
        let mut store = DocumentStore::new();
        store.run_transform();
        let transformed_before = store.transformed_json.clone();

        // Renaming a key to itself must not commit: a commit would mirror
        // parsed_json over the transform output.
        store.bulk_rename_key("role", "role");
        assert_eq!(store.transformed_json, transformed_before);

        store.bulk_rename_key("role", "kind");
        assert_eq!(store.parsed_json["users"][0]["kind"], json!("admin"));
        assert!(store.parsed_json["users"][0].get("role").is_none());
        assert_eq!(store.transformed_json, store.parsed_json);
    }

    #[test]
    fn bulk_delete_removes_key_everywhere() {
        let mut store = DocumentStore::new();
        store.bulk_delete_key("age");
        for user in store.parsed_json["users"].as_array().unwrap() {
            assert!(user.get("age").is_none());
        }
    }

    #[test]
    fn reset_restores_the_sample() {
        let mut store = DocumentStore::new();
        store.set_json_input(r#"{"x": 1}"#);
        store.set_transform_code(r#"["$", "$.x"]"#);
        store.run_transform();
        store.reset();
        let fresh = DocumentStore::new();
        assert_eq!(store.parsed_json, fresh.parsed_json);
        assert_eq!(store.transform_code, fresh.transform_code);
        assert!(store.history.is_empty());
        assert!(store.console_logs.is_empty());
    }
}

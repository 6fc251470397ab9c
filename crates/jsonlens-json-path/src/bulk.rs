//! Whole-tree key operations.
//!
//! These walk the entire document rather than a single addressed location:
//! every object at any depth is rebuilt with the key renamed or removed,
//! preserving the order of the remaining keys.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::ops::MAX_DEPTH;

/// Renames every occurrence of `old_key` to `new_key` at any depth.
///
/// When `old_key == new_key` the input is returned borrowed; callers can use
/// this identity short-circuit to skip redundant persistence.
pub fn bulk_rename_key<'a>(root: &'a Value, old_key: &str, new_key: &str) -> Cow<'a, Value> {
    if old_key == new_key {
        return Cow::Borrowed(root);
    }
    Cow::Owned(rename_walk(root, old_key, new_key, 0))
}

fn rename_walk(current: &Value, old_key: &str, new_key: &str, depth: usize) -> Value {
    if depth >= MAX_DEPTH {
        return current.clone();
    }
    match current {
        Value::Array(arr) => Value::Array(
            arr.iter()
                .map(|item| rename_walk(item, old_key, new_key, depth + 1))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, value) in map {
                let renamed = if key == old_key { new_key } else { key.as_str() };
                out.insert(
                    renamed.to_string(),
                    rename_walk(value, old_key, new_key, depth + 1),
                );
            }
            Value::Object(out)
        }
        _ => current.clone(),
    }
}

/// Removes every occurrence of `key` from every object at any depth.
pub fn bulk_delete_key(root: &Value, key: &str) -> Value {
    delete_walk(root, key, 0)
}

fn delete_walk(current: &Value, key: &str, depth: usize) -> Value {
    if depth >= MAX_DEPTH {
        return current.clone();
    }
    match current {
        Value::Array(arr) => Value::Array(
            arr.iter()
                .map(|item| delete_walk(item, key, depth + 1))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                if k == key {
                    continue;
                }
                out.insert(k.clone(), delete_walk(v, key, depth + 1));
            }
            Value::Object(out)
        }
        _ => current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bulk_rename_all_levels() {
        let data = json!({
            "name": "root",
            "children": [{"name": "child1"}, {"name": "child2"}]
        });
        let result = bulk_rename_key(&data, "name", "label").into_owned();
        assert_eq!(result["label"], json!("root"));
        assert!(result.get("name").is_none());
        assert_eq!(result["children"][0]["label"], json!("child1"));
        assert_eq!(result["children"][1]["label"], json!("child2"));
    }

    #[test]
    fn test_bulk_rename_identity_short_circuit() {
        let data = json!({"name": "x"});
        assert!(matches!(
            bulk_rename_key(&data, "name", "name"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_bulk_rename_preserves_key_order() {
        let data = json!({"a": 1, "total": 2, "b": 3});
        let result = bulk_rename_key(&data, "total", "count").into_owned();
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "count", "b"]);
    }

    #[test]
    fn test_bulk_rename_does_not_mutate_input() {
        let data = json!({"name": "x", "nested": {"name": "y"}});
        let before = data.clone();
        let _ = bulk_rename_key(&data, "name", "label");
        assert_eq!(data, before);
    }

    #[test]
    fn test_bulk_delete_all_levels() {
        let data = json!({
            "users": [
                {"id": 1, "name": "Alice", "age": 30},
                {"id": 2, "name": "Bob", "age": 25}
            ]
        });
        let result = bulk_delete_key(&data, "id");
        assert_eq!(result["users"][0], json!({"name": "Alice", "age": 30}));
        assert_eq!(result["users"][1], json!({"name": "Bob", "age": 25}));
    }

    #[test]
    fn test_bulk_delete_in_arrays_of_objects() {
        let data = json!({"items": [{"a": 1, "b": 2}, {"a": 3, "b": 4}]});
        let result = bulk_delete_key(&data, "a");
        assert_eq!(result, json!({"items": [{"b": 2}, {"b": 4}]}));
    }

    #[test]
    fn test_bulk_delete_preserves_remaining_order() {
        let data = json!({"x": 1, "drop": 2, "y": 3});
        let result = bulk_delete_key(&data, "drop");
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
    }
}

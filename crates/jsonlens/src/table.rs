//! Table-view helpers: discovering tabular slices of a document and
//! rendering/ordering their cells.

use jsonlens_json_path::is_simple_key;
use serde_json::Value;
use std::cmp::Ordering;

pub use jsonlens_json_path::get_flattened;

/// One array the table view can show: where it lives, how to label it in
/// the selector, and how many rows it has.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPath {
    pub path: String,
    pub label: String,
    pub length: usize,
}

fn path_label(path: &str) -> String {
    if path == "$" {
        "root".to_string()
    } else {
        path.trim_start_matches('$')
            .trim_start_matches('.')
            .to_string()
    }
}

/// Nested-array columns are sampled from the first row only; a field that
/// is an array of objects in row 0 is offered as a `[*].field` slice.
fn find_nested_arrays(first_row: &Value, path: &str, results: &mut Vec<ArrayPath>) {
    let Some(obj) = first_row.as_object() else {
        return;
    };
    let prefix = if path == "$" {
        String::new()
    } else {
        format!("{}.", path_label(path))
    };
    for (key, value) in obj {
        let Some(arr) = value.as_array() else {
            continue;
        };
        if arr.iter().any(|v| v.is_object()) {
            results.push(ArrayPath {
                path: format!("{path}[*].{key}"),
                label: format!("{prefix}[*].{key}"),
                length: arr.len(),
            });
        }
    }
}

fn walk_array_paths(data: &Value, path: &str, results: &mut Vec<ArrayPath>) {
    match data {
        Value::Array(items) => {
            if items.iter().any(|item| item.is_object()) {
                results.push(ArrayPath {
                    path: path.to_string(),
                    label: path_label(path),
                    length: items.len(),
                });
            }
            if let Some(first) = items.first() {
                find_nested_arrays(first, path, results);
            }
        }
        Value::Object(obj) => {
            for (key, value) in obj {
                let child_path = if is_simple_key(key) {
                    format!("{path}.{key}")
                } else {
                    format!("{path}[\"{key}\"]")
                };
                walk_array_paths(value, &child_path, results);
            }
        }
        _ => {}
    }
}

/// Every array of objects reachable through objects, plus nested `[*]`
/// slices sampled from each array's first row.
pub fn find_array_paths(data: &Value) -> Vec<ArrayPath> {
    let mut results = Vec::new();
    walk_array_paths(data, "$", &mut results);
    results
}

/// Union of object-row keys in first-seen order; non-object rows contribute
/// nothing.
pub fn get_columns(rows: &[Value]) -> Vec<String> {
    let mut cols: Vec<String> = Vec::new();
    for row in rows {
        if let Some(obj) = row.as_object() {
            for key in obj.keys() {
                if !cols.iter().any(|c| c == key) {
                    cols.push(key.clone());
                }
            }
        }
    }
    cols
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stable identity for a row: an id-ish field if present, else the first
/// column's value suffixed with the index, else the index alone.
pub fn row_key(row: &Value, index: usize, columns: &[String]) -> String {
    if let Some(obj) = row.as_object() {
        for id_field in ["id", "_id", "key"] {
            if let Some(id) = obj.get(id_field) {
                if !id.is_null() {
                    return scalar_text(id);
                }
            }
        }
        if let Some(first) = columns.first() {
            if let Some(v) = obj.get(first) {
                return format!("{}-{}", scalar_text(v), index);
            }
        }
    }
    format!("row-{index}")
}

/// Cell text: `null` literally, absent empty, containers as compact JSON,
/// scalars unquoted.
pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Array(_) | Value::Object(_))) => v.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Sort order for a column: nulls and absent cells last, numeric pairs
/// numerically, everything else by string.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (a, b) if a == b => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        (Some(Value::Number(na)), Some(Value::Number(nb))) => {
            let fa = na.as_f64().unwrap_or(0.0);
            let fb = nb.as_f64().unwrap_or(0.0);
            fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
        }
        (Some(a), Some(b)) => scalar_text(a).cmp(&scalar_text(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_top_level_and_nested_object_arrays() {
        let data = json!({
            "users": [
                {"name": "Ada", "tags": [{"t": "x"}, {"t": "y"}]},
                {"name": "Bob"}
            ],
            "counts": [1, 2, 3],
            "meta": {"entries": [{"k": "v"}]}
        });
        let paths = find_array_paths(&data);
        assert_eq!(
            paths,
            vec![
                ArrayPath {
                    path: "$.users".to_string(),
                    label: "users".to_string(),
                    length: 2
                },
                ArrayPath {
                    path: "$.users[*].tags".to_string(),
                    label: "users.[*].tags".to_string(),
                    length: 2
                },
                ArrayPath {
                    path: "$.meta.entries".to_string(),
                    label: "meta.entries".to_string(),
                    length: 1
                },
            ]
        );
    }

    #[test]
    fn a_root_array_is_labeled_root() {
        let data = json!([{"a": 1}]);
        let paths = find_array_paths(&data);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].path, "$");
        assert_eq!(paths[0].label, "root");
    }

    #[test]
    fn primitive_arrays_are_not_offered() {
        assert!(find_array_paths(&json!({"xs": [1, 2, 3]})).is_empty());
    }

    #[test]
    fn keys_needing_quoting_get_bracket_paths() {
        let data = json!({"odd key": [{"a": 1}]});
        let paths = find_array_paths(&data);
        assert_eq!(paths[0].path, "$[\"odd key\"]");
    }

    #[test]
    fn columns_union_in_first_seen_order() {
        let rows = vec![json!({"b": 1, "a": 2}), json!({"c": 3, "a": 4}), json!("noise")];
        assert_eq!(get_columns(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn row_key_prefers_id_fields() {
        let cols = vec!["name".to_string()];
        assert_eq!(row_key(&json!({"id": 7, "name": "x"}), 0, &cols), "7");
        assert_eq!(row_key(&json!({"_id": "abc"}), 0, &cols), "abc");
        assert_eq!(row_key(&json!({"key": "k1"}), 0, &cols), "k1");
        assert_eq!(row_key(&json!({"name": "Ada"}), 3, &cols), "Ada-3");
        assert_eq!(row_key(&json!({"other": 1}), 5, &cols), "row-5");
        assert_eq!(row_key(&json!("scalar"), 2, &cols), "row-2");
    }

    #[test]
    fn cell_formatting() {
        assert_eq!(format_cell(None), "");
        assert_eq!(format_cell(Some(&json!(null))), "null");
        assert_eq!(format_cell(Some(&json!("text"))), "text");
        assert_eq!(format_cell(Some(&json!(3.5))), "3.5");
        assert_eq!(format_cell(Some(&json!({"a": 1}))), "{\"a\":1}");
        assert_eq!(format_cell(Some(&json!([1, 2]))), "[1,2]");
    }

    #[test]
    fn cell_ordering_puts_nulls_last() {
        let one = json!(1);
        let ten = json!(10);
        let null = json!(null);
        let apple = json!("apple");
        let pear = json!("pear");
        assert_eq!(compare_cells(Some(&one), Some(&ten)), Ordering::Less);
        assert_eq!(compare_cells(Some(&null), Some(&one)), Ordering::Greater);
        assert_eq!(compare_cells(None, Some(&one)), Ordering::Greater);
        assert_eq!(compare_cells(Some(&apple), Some(&pear)), Ordering::Less);
        assert_eq!(compare_cells(Some(&one), Some(&one)), Ordering::Equal);
    }

    #[test]
    fn flattened_lookup_supports_wildcard_columns() {
        let data = json!({"users": [
            {"name": "Ada", "tags": ["x"]},
            {"name": "Bob", "tags": ["y", "z"]}
        ]});
        assert_eq!(
            get_flattened(&data, "$.users[*].name"),
            Some(json!(["Ada", "Bob"]))
        );
        assert_eq!(
            get_flattened(&data, "$.users[*].tags"),
            Some(json!(["x", "y", "z"]))
        );
    }
}

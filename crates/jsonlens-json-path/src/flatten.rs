//! Wildcard-flattening lookup used by table views.
//!
//! This is a second, divergent addressing mode layered onto the same grammar
//! and is kept separate from [`crate::get_value`] on purpose: `set`/`delete`/
//! `add` do not understand the wildcard form at all.
//!
//! Two extra rules apply on arrays: `[*]` is consumed without descending, and
//! a non-numeric key flat-maps that key across the array's object elements
//! (non-objects contribute nothing, nested arrays are spliced in).

use serde_json::Value;

use crate::parse::parse_path;

/// Resolves `path` against `root` with wildcard flattening.
pub fn get_flattened(root: &Value, path: &str) -> Option<Value> {
    if path == "$" {
        return Some(root.clone());
    }

    let segments = parse_path(path);
    let mut current = root.clone();

    for seg in &segments {
        if current.is_null() {
            return None;
        }
        if seg == "*" && current.is_array() {
            continue;
        }
        current = match current {
            Value::Array(arr) => {
                if let Ok(idx) = seg.parse::<usize>() {
                    arr.get(idx).cloned()?
                } else {
                    let mut out = Vec::new();
                    for item in &arr {
                        let Value::Object(map) = item else { continue };
                        match map.get(seg) {
                            Some(Value::Array(inner)) => out.extend(inner.iter().cloned()),
                            Some(Value::Null) | None => {}
                            Some(other) => out.push(other.clone()),
                        }
                    }
                    Value::Array(out)
                }
            }
            Value::Object(map) => map.get(seg).cloned()?,
            _ => return None,
        };
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Value {
        json!({
            "users": [
                {"name": "Alice", "tags": ["a", "b"]},
                {"name": "Bob", "tags": ["c"]},
                {"name": "Carol"}
            ]
        })
    }

    #[test]
    fn test_root_passthrough() {
        let data = rows();
        assert_eq!(get_flattened(&data, "$"), Some(data));
    }

    #[test]
    fn test_plain_property_walk() {
        let data = rows();
        assert_eq!(
            get_flattened(&data, "$.users[0].name"),
            Some(json!("Alice"))
        );
    }

    #[test]
    fn test_wildcard_is_passthrough_on_arrays() {
        let data = rows();
        assert_eq!(
            get_flattened(&data, "$.users[*].name"),
            Some(json!(["Alice", "Bob", "Carol"]))
        );
    }

    #[test]
    fn test_field_on_array_flat_maps() {
        let data = rows();
        // Nested arrays are spliced, missing fields contribute nothing.
        assert_eq!(
            get_flattened(&data, "$.users[*].tags"),
            Some(json!(["a", "b", "c"]))
        );
    }

    #[test]
    fn test_non_object_elements_contribute_nothing() {
        let data = json!([1, {"v": 2}, "x"]);
        assert_eq!(get_flattened(&data, "$[*].v"), Some(json!([2])));
    }

    #[test]
    fn test_scalar_mid_path_is_none() {
        let data = json!({"a": 5});
        assert_eq!(get_flattened(&data, "$.a.b"), None);
    }
}

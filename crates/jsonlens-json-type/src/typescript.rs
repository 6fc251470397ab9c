//! TypeScript type alias emission.

use jsonlens_json_path::is_simple_key;
use serde_json::{Map, Value};

use crate::shape::{capitalize, merge_shapes};

const TAB: &str = "  ";

fn safe_key(key: &str) -> String {
    if is_simple_key(key) {
        key.to_string()
    } else {
        format!("\"{key}\"")
    }
}

fn infer_type(value: &Value, name: &str, indent: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Array(arr) => {
            if arr.is_empty() {
                return "unknown[]".to_string();
            }
            let first = &arr[0];
            if first.is_object() {
                let merged = merge_shapes(arr.iter());
                format!(
                    "{}[]",
                    render_literal(&merged, &format!("{name}Item"), indent)
                )
            } else {
                // Only the first element informs the item type.
                format!("{}[]", infer_type(first, &format!("{name}Item"), indent))
            }
        }
        Value::Object(map) => render_literal(map, name, indent),
    }
}

fn render_literal(obj: &Map<String, Value>, name: &str, indent: usize) -> String {
    let pad = TAB.repeat(indent);
    let inner_pad = TAB.repeat(indent + 1);
    let mut out = String::from("{\n");
    for (key, value) in obj {
        let type_name = format!("{}{}", capitalize(name), capitalize(key));
        out.push_str(&format!(
            "{inner_pad}{}: {};\n",
            safe_key(key),
            infer_type(value, &type_name, indent + 1)
        ));
    }
    out.push_str(&pad);
    out.push('}');
    out
}

/// Renders a `type <Root> = ...;` declaration describing `data`.
///
/// An array of objects introduces a named `<Root>Item` alias merged across
/// all object elements; an array of primitives is typed from its first
/// element only.
pub fn json_to_typescript(data: &Value, root_name: &str) -> String {
    match data {
        Value::Array(arr) => {
            if arr.is_empty() {
                return format!("type {root_name} = unknown[];");
            }
            let first = &arr[0];
            if first.is_object() {
                let merged = merge_shapes(arr.iter());
                let literal = render_literal(&merged, &format!("{root_name}Item"), 0);
                format!(
                    "type {root_name}Item = {literal}\n\ntype {root_name} = {root_name}Item[];"
                )
            } else {
                format!("type {root_name} = {}[];", infer_type(first, root_name, 0))
            }
        }
        Value::Object(map) => {
            format!("type {root_name} = {}", render_literal(map, root_name, 0))
        }
        primitive => format!("type {root_name} = {};", infer_type(primitive, root_name, 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null() {
        assert_eq!(json_to_typescript(&json!(null), "Root"), "type Root = null;");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(
            json_to_typescript(&json!("hello"), "Root"),
            "type Root = string;"
        );
        assert_eq!(json_to_typescript(&json!(42), "Root"), "type Root = number;");
        assert_eq!(
            json_to_typescript(&json!(true), "Root"),
            "type Root = boolean;"
        );
    }

    #[test]
    fn test_simple_object() {
        let result = json_to_typescript(&json!({"name": "Alice", "age": 30, "active": true}), "Root");
        assert!(result.starts_with("type Root = {"));
        assert!(result.contains("name: string;"));
        assert!(result.contains("age: number;"));
        assert!(result.contains("active: boolean;"));
    }

    #[test]
    fn test_array_of_objects_gets_item_alias() {
        let data = json!([{"id": 1, "label": "A"}, {"id": 2, "label": "B"}]);
        let result = json_to_typescript(&data, "Root");
        assert!(result.contains("type RootItem = {"));
        assert!(result.contains("id: number;"));
        assert!(result.contains("label: string;"));
        assert!(result.contains("type Root = RootItem[];"));
    }

    #[test]
    fn test_merge_unions_late_only_fields() {
        let data = json!([{"a": 1}, {"b": 2}]);
        let result = json_to_typescript(&data, "Root");
        assert!(result.contains("a: number;"));
        assert!(result.contains("b: number;"));
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(
            json_to_typescript(&json!([]), "Root"),
            "type Root = unknown[];"
        );
    }

    #[test]
    fn test_array_of_primitives_samples_first() {
        assert_eq!(
            json_to_typescript(&json!(["a", "b"]), "Root"),
            "type Root = string[];"
        );
    }

    #[test]
    fn test_custom_root_name() {
        let result = json_to_typescript(&json!({"x": 1}), "MyType");
        assert!(result.contains("type MyType = {"));
        assert!(result.contains("x: number;"));
    }

    #[test]
    fn test_nested_object_inlines_literal() {
        let result = json_to_typescript(&json!({"user": {"name": "Alice"}}), "Root");
        assert!(result.contains("user: {"));
        assert!(result.contains("name: string;"));
    }

    #[test]
    fn test_unsafe_keys_are_quoted() {
        let result = json_to_typescript(&json!({"full name": "x"}), "Root");
        assert!(result.contains("\"full name\": string;"));
    }
}

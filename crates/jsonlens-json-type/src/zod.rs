//! Zod schema module emission.

use jsonlens_json_path::is_simple_key;
use serde_json::{Map, Number, Value};

use crate::shape::{capitalize, merge_shapes};

const TAB: &str = "  ";
const PREAMBLE: &str = "import { z } from \"zod\";";

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// Integer-valued floats (e.g. 5.0) count as integers, matching the display
// convention rather than the wire encoding.
fn is_integer(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64()
        .map(|f| f.is_finite() && f.fract() == 0.0)
        .unwrap_or(false)
}

fn safe_key(key: &str) -> String {
    if is_simple_key(key) {
        key.to_string()
    } else {
        format!("\"{key}\"")
    }
}

fn infer_schema(value: &Value, name: &str, indent: usize) -> String {
    match value {
        Value::Null => "z.null()".to_string(),
        Value::String(_) => "z.string()".to_string(),
        Value::Number(n) => {
            if is_integer(n) {
                "z.number().int()".to_string()
            } else {
                "z.number()".to_string()
            }
        }
        Value::Bool(_) => "z.boolean()".to_string(),
        Value::Array(arr) => {
            if arr.is_empty() {
                return "z.array(z.unknown())".to_string();
            }
            let first = &arr[0];
            if first.is_object() {
                let merged = merge_shapes(arr.iter());
                format!(
                    "z.array({})",
                    render_object(&merged, &format!("{name}Item"), indent)
                )
            } else {
                format!(
                    "z.array({})",
                    infer_schema(first, &format!("{name}Item"), indent)
                )
            }
        }
        Value::Object(map) => render_object(map, name, indent),
    }
}

fn render_object(obj: &Map<String, Value>, name: &str, indent: usize) -> String {
    let pad = TAB.repeat(indent);
    let inner_pad = TAB.repeat(indent + 1);
    let mut out = String::from("z.object({\n");
    for (key, value) in obj {
        let type_name = format!("{}{}", capitalize(name), capitalize(key));
        out.push_str(&format!(
            "{inner_pad}{}: {},\n",
            safe_key(key),
            infer_schema(value, &type_name, indent + 1)
        ));
    }
    out.push_str(&pad);
    out.push_str("})");
    out
}

/// Renders an importable Zod schema module describing `data`.
///
/// The module is a `z` import followed by one or more `const <name>Schema`
/// bindings; an array of objects predeclares its item schema as a named
/// binding and references it from the array schema.
pub fn json_to_zod(data: &Value, root_name: &str) -> String {
    let schema_name = format!("{}Schema", lower_first(root_name));

    match data {
        Value::Array(arr) => {
            if arr.is_empty() {
                return format!("{PREAMBLE}\n\nconst {schema_name} = z.array(z.unknown());");
            }
            let first = &arr[0];
            if first.is_object() {
                let merged = merge_shapes(arr.iter());
                let item = render_object(&merged, &format!("{root_name}Item"), 0);
                format!(
                    "{PREAMBLE}\n\nconst {root_name}ItemSchema = {item};\n\nconst {schema_name} = z.array({root_name}ItemSchema);"
                )
            } else {
                format!(
                    "{PREAMBLE}\n\nconst {schema_name} = z.array({});",
                    infer_schema(first, root_name, 0)
                )
            }
        }
        Value::Object(map) => {
            format!(
                "{PREAMBLE}\n\nconst {schema_name} = {};",
                render_object(map, root_name, 0)
            )
        }
        primitive => format!(
            "{PREAMBLE}\n\nconst {schema_name} = {};",
            infer_schema(primitive, root_name, 0)
        ),
    }
}

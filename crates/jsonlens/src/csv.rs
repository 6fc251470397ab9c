//! CSV export of transform output.
//!
//! Only tabular shapes export: an array of objects, an array of primitives,
//! or a single object. Everything else (scalars, arrays of arrays) yields
//! `None` and the caller disables the export.

use serde_json::{Map, Value};

/// Field escaping: quote and double internal quotes when the text contains
/// a comma, quote, or newline. `null` renders as the bare word, absent
/// fields as the empty string, containers as compact JSON.
fn escape_field(value: Option<&Value>) -> String {
    let text = match value {
        None => return String::new(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(container) => container.to_string(),
    };
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

fn escape_key(key: &str) -> String {
    escape_field(Some(&Value::String(key.to_string())))
}

/// Union of row keys in first-seen order.
fn columns(rows: &[&Map<String, Value>]) -> Vec<String> {
    let mut cols: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !cols.iter().any(|c| c == key) {
                cols.push(key.clone());
            }
        }
    }
    cols
}

pub fn json_to_csv(data: &Value) -> Option<String> {
    match data {
        Value::Array(items) => {
            if items.is_empty() {
                return None;
            }
            if items.iter().all(|item| !item.is_object() && !item.is_array()) {
                let body: Vec<String> =
                    items.iter().map(|v| escape_field(Some(v))).collect();
                return Some(format!("value\n{}", body.join("\n")));
            }

            let rows: Vec<&Map<String, Value>> =
                items.iter().filter_map(|item| item.as_object()).collect();
            if rows.is_empty() {
                return None;
            }
            let cols = columns(&rows);
            let header: Vec<String> = cols.iter().map(|c| escape_key(c)).collect();
            let mut lines = vec![header.join(",")];
            for row in rows {
                let line: Vec<String> =
                    cols.iter().map(|c| escape_field(row.get(c))).collect();
                lines.push(line.join(","));
            }
            Some(lines.join("\n"))
        }
        Value::Object(obj) => {
            let mut lines = vec!["key,value".to_string()];
            for (k, v) in obj {
                lines.push(format!("{},{}", escape_key(k), escape_field(Some(v))));
            }
            Some(lines.join("\n"))
        }
        _ => None,
    }
}

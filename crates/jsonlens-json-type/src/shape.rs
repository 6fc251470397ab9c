//! Value classification, display forms, and the shape merge.

use serde_json::{Map, Value};

/// The coarse classification of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

/// Classifies a value.
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::String(_) => ValueKind::String,
        Value::Number(_) => ValueKind::Number,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// True for anything that is not a container.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Canonical one-line display form of a value, paired with its kind.
///
/// Strings are double-quoted; null, numbers, and booleans use their literal
/// text; arrays render as `Array(<len>)` and objects as `Object`.
pub fn value_display(value: &Value) -> (String, ValueKind) {
    let kind = kind_of(value);
    let display = match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => format!("Array({})", arr.len()),
        Value::Object(_) => "Object".to_string(),
    };
    (display, kind)
}

/// Unions the key sets of the object-typed inputs into one synthetic shape.
///
/// Non-objects are skipped. Each key is inserted exactly once with the value
/// from the first object that defines it; repeat occurrences are ignored even
/// when typed differently.
pub fn merge_shapes<'a, I>(values: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = Map::new();
    for value in values {
        let Value::Object(map) = value else { continue };
        for (key, field) in map {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), field.clone());
            }
        }
    }
    merged
}

/// Uppercases the first character, used to synthesize nested type names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

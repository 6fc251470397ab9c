//! Immutable structural edits addressed by path.
//!
//! Every mutating operation returns a brand-new root value and leaves its
//! input untouched; containers along the edited path are shallow-copied and
//! everything off the path is cloned as-is. None of these functions raise for
//! malformed or stale paths: they degrade to no-ops (or `None` for lookups),
//! since callers derive paths from previously rendered, valid locations.

use serde_json::{Map, Value};

use crate::parse::{build_path, parse_path};

/// Hard ceiling on addressable nesting. Paths longer than this are treated as
/// no-ops so a pathological input cannot blow the call stack.
pub const MAX_DEPTH: usize = 512;

/// Walks `path` from `root` and returns the addressed value, if any.
///
/// Arrays are indexed by integer segments only; objects by key. A null or
/// scalar encountered mid-path short-circuits to `None`.
pub fn get_value<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = parse_path(path);
    let mut current = root;
    for seg in &segments {
        if current.is_null() {
            return None;
        }
        match current {
            Value::Array(arr) => {
                let idx: usize = seg.parse().ok()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(seg)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Replaces the value at `path`, returning a new root.
///
/// The empty path replaces the whole document. Out-of-range indices, missing
/// intermediate keys, and scalar intermediates leave the tree unchanged.
pub fn set_value(root: &Value, path: &str, value: Value) -> Value {
    let segments = parse_path(path);
    if segments.is_empty() {
        return value;
    }
    if segments.len() > MAX_DEPTH {
        return root.clone();
    }
    set_recursive(root, &segments, 0, value)
}

fn set_recursive(current: &Value, segments: &[String], index: usize, value: Value) -> Value {
    let seg = &segments[index];
    let last = index + 1 == segments.len();

    match current {
        Value::Array(arr) => match seg.parse::<usize>() {
            Ok(idx) if idx < arr.len() => {
                let mut out = arr.clone();
                out[idx] = if last {
                    value
                } else {
                    set_recursive(&arr[idx], segments, index + 1, value)
                };
                Value::Array(out)
            }
            _ => current.clone(),
        },
        Value::Object(map) => {
            if last {
                let mut out = map.clone();
                out.insert(seg.clone(), value);
                return Value::Object(out);
            }
            match map.get(seg) {
                Some(child) => {
                    let mut out = map.clone();
                    out.insert(seg.clone(), set_recursive(child, segments, index + 1, value));
                    Value::Object(out)
                }
                None => current.clone(),
            }
        }
        _ => current.clone(),
    }
}

/// Removes the value at `path`, returning a new root.
///
/// The empty path yields `None`; deleting the whole document is the caller's
/// decision. Array deletion splices, shifting subsequent indices down, so
/// sibling paths after the deleted index change identity.
pub fn delete_value(root: &Value, path: &str) -> Option<Value> {
    let segments = parse_path(path);
    if segments.is_empty() {
        return None;
    }
    if segments.len() > MAX_DEPTH {
        return Some(root.clone());
    }
    Some(delete_recursive(root, &segments, 0))
}

fn delete_recursive(current: &Value, segments: &[String], index: usize) -> Value {
    let seg = &segments[index];

    if index + 1 == segments.len() {
        return match current {
            Value::Array(arr) => match seg.parse::<usize>() {
                Ok(idx) if idx < arr.len() => {
                    let mut out = arr.clone();
                    out.remove(idx);
                    Value::Array(out)
                }
                _ => current.clone(),
            },
            Value::Object(map) => {
                let mut out = map.clone();
                out.shift_remove(seg);
                Value::Object(out)
            }
            _ => current.clone(),
        };
    }

    match current {
        Value::Array(arr) => match seg.parse::<usize>() {
            Ok(idx) if idx < arr.len() => {
                let mut out = arr.clone();
                out[idx] = delete_recursive(&arr[idx], segments, index + 1);
                Value::Array(out)
            }
            _ => current.clone(),
        },
        Value::Object(map) => match map.get(seg) {
            Some(child) => {
                let mut out = map.clone();
                out.insert(seg.clone(), delete_recursive(child, segments, index + 1));
                Value::Object(out)
            }
            None => current.clone(),
        },
        _ => current.clone(),
    }
}

/// Renames the key addressed by `path` (its last segment is the old key).
///
/// The parent must be an object; otherwise the root is returned unchanged.
/// The parent is rebuilt in its original key order with the new name spliced
/// into the old key's position, which is what preserves ordering.
pub fn rename_key(root: &Value, path: &str, new_key: &str) -> Value {
    let segments = parse_path(path);
    let Some((old_key, parent_segments)) = segments.split_last() else {
        return root.clone();
    };

    let parent_path = build_path(parent_segments);
    let Some(Value::Object(parent)) = get_value(root, &parent_path) else {
        return root.clone();
    };

    let mut rebuilt = Map::new();
    for (k, v) in parent {
        if k == old_key {
            rebuilt.insert(new_key.to_string(), v.clone());
        } else {
            rebuilt.insert(k.clone(), v.clone());
        }
    }

    if parent_segments.is_empty() {
        return Value::Object(rebuilt);
    }
    set_value(root, &parent_path, Value::Object(rebuilt))
}

/// Adds an entry to the container at `path`.
///
/// Arrays append `value` (the `key` argument is ignored); objects insert
/// `key`, overwriting on collision. Non-container targets are a no-op.
pub fn add_entry(root: &Value, path: &str, key: &str, value: Value) -> Value {
    let at_root = parse_path(path).is_empty();

    match get_value(root, path) {
        Some(Value::Array(arr)) => {
            let mut out = arr.clone();
            out.push(value);
            if at_root {
                Value::Array(out)
            } else {
                set_value(root, path, Value::Array(out))
            }
        }
        Some(Value::Object(map)) => {
            let mut out = map.clone();
            out.insert(key.to_string(), value);
            if at_root {
                Value::Object(out)
            } else {
                set_value(root, path, Value::Object(out))
            }
        }
        _ => root.clone(),
    }
}

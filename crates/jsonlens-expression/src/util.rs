//! Coercion and comparison helpers shared by the operator implementations.

use crate::error::ExprError;
use crate::types::ExprValue;
use serde_json::Value;
use std::cmp::Ordering;

// ----------------------------------------------------------------- Coercions

/// Converts a value to a number. Absent values and non-numeric text coerce
/// to 0.
pub fn num(value: &ExprValue) -> f64 {
    let n = match value {
        ExprValue::Undefined => f64::NAN,
        ExprValue::Json(v) => match v {
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            Value::Array(_) | Value::Object(_) => f64::NAN,
        },
    };
    if n.is_nan() {
        0.0
    } else {
        n
    }
}

/// Converts a number back to a JSON value, preferring integer representation
/// for whole results so `["+", 1, 2]` yields `3`, not `3.0`.
pub fn num_to_value(n: f64) -> ExprValue {
    if n.is_finite() && n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&n) {
        return ExprValue::Json(Value::Number(serde_json::Number::from(n as i64)));
    }
    match serde_json::Number::from_f64(n) {
        Some(number) => ExprValue::Json(Value::Number(number)),
        // NaN/Infinity have no JSON representation.
        None => ExprValue::Json(Value::Null),
    }
}

pub fn i64_to_value(n: i64) -> ExprValue {
    ExprValue::Json(Value::Number(serde_json::Number::from(n)))
}

/// Converts a value to a display string.
pub fn str_val(value: &ExprValue) -> String {
    match value {
        ExprValue::Undefined => "undefined".to_string(),
        ExprValue::Json(v) => match v {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => v.to_string(),
        },
    }
}

/// Truthiness: absent, `null`, `false`, `0`, and `""` are false; containers
/// are always true.
pub fn is_truthy(value: &ExprValue) -> bool {
    match value {
        ExprValue::Undefined => false,
        ExprValue::Json(v) => match v {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        },
    }
}

// --------------------------------------------------------------- Extractors

pub fn as_arr(value: &ExprValue) -> Result<&Vec<Value>, ExprError> {
    match value {
        ExprValue::Json(Value::Array(a)) => Ok(a),
        _ => Err(ExprError::NotArray),
    }
}

pub fn as_obj(value: &ExprValue) -> Result<&serde_json::Map<String, Value>, ExprError> {
    match value {
        ExprValue::Json(Value::Object(o)) => Ok(o),
        _ => Err(ExprError::NotObject),
    }
}

pub fn as_str(value: &ExprValue) -> Result<&str, ExprError> {
    match value {
        ExprValue::Json(Value::String(s)) => Ok(s.as_str()),
        _ => Err(ExprError::NotString),
    }
}

// --------------------------------------------------------------- Comparison

/// Total order used by `sortBy` and the relational operators: numbers compare
/// numerically, everything else by display string, absent values sort last.
pub fn cmp_values(a: &ExprValue, b: &ExprValue) -> Ordering {
    match (a, b) {
        (ExprValue::Undefined, ExprValue::Undefined) => Ordering::Equal,
        (ExprValue::Undefined, _) => Ordering::Greater,
        (_, ExprValue::Undefined) => Ordering::Less,
        (ExprValue::Json(Value::Number(na)), ExprValue::Json(Value::Number(nb))) => {
            let fa = na.as_f64().unwrap_or(0.0);
            let fb = nb.as_f64().unwrap_or(0.0);
            fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
        }
        _ => str_val(a).cmp(&str_val(b)),
    }
}

// ----------------------------------------------------------------- Division

pub fn slash(a: &ExprValue, b: &ExprValue) -> Result<ExprValue, ExprError> {
    let divisor = num(b);
    if divisor == 0.0 {
        return Err(ExprError::DivisionByZero);
    }
    let res = num(a) / divisor;
    Ok(num_to_value(if res.is_finite() { res } else { 0.0 }))
}

pub fn modulo(a: &ExprValue, b: &ExprValue) -> Result<ExprValue, ExprError> {
    let divisor = num(b);
    if divisor == 0.0 {
        return Err(ExprError::DivisionByZero);
    }
    let res = num(a) % divisor;
    Ok(num_to_value(if res.is_finite() { res } else { 0.0 }))
}

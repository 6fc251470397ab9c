//! Object operators.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::{Map, Value};
use std::sync::Arc;

fn get_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let container = crate::evaluate(&expr[1], ctx)?;
    let key = crate::evaluate(&expr[2], ctx)?;
    match &container {
        ExprValue::Json(Value::Object(obj)) => {
            let k = util::str_val(&key);
            Ok(obj
                .get(&k)
                .map(|v| ExprValue::Json(v.clone()))
                .unwrap_or(ExprValue::Undefined))
        }
        ExprValue::Json(Value::Array(arr)) => {
            let i = util::num(&key) as i64;
            if i < 0 || i as usize >= arr.len() {
                return Ok(ExprValue::Undefined);
            }
            Ok(ExprValue::Json(arr[i as usize].clone()))
        }
        _ => Err(ExprError::NotObject),
    }
}

fn pick_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let value = crate::evaluate(&expr[1], ctx)?;
    let obj = util::as_obj(&value)?.clone();
    let mut result = Map::new();
    for operand in &expr[2..] {
        let key = crate::evaluate(operand, ctx)?;
        let key = util::as_str(&key)?;
        if let Some(v) = obj.get(key) {
            result.insert(key.to_string(), v.clone());
        }
    }
    Ok(ExprValue::Json(Value::Object(result)))
}

fn omit_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let value = crate::evaluate(&expr[1], ctx)?;
    let mut result = util::as_obj(&value)?.clone();
    for operand in &expr[2..] {
        let key = crate::evaluate(operand, ctx)?;
        result.shift_remove(util::as_str(&key)?);
    }
    Ok(ExprValue::Json(Value::Object(result)))
}

fn keys_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let value = crate::evaluate(&expr[1], ctx)?;
    let obj = util::as_obj(&value)?;
    let ks: Vec<Value> = obj.keys().map(|k| Value::String(k.clone())).collect();
    Ok(ExprValue::Json(Value::Array(ks)))
}

fn values_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let value = crate::evaluate(&expr[1], ctx)?;
    let obj = util::as_obj(&value)?;
    Ok(ExprValue::Json(Value::Array(obj.values().cloned().collect())))
}

fn entries_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let value = crate::evaluate(&expr[1], ctx)?;
    let obj = util::as_obj(&value)?;
    let es: Vec<Value> = obj
        .iter()
        .map(|(k, v)| Value::Array(vec![Value::String(k.clone()), v.clone()]))
        .collect();
    Ok(ExprValue::Json(Value::Array(es)))
}

fn merge_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let mut result = Map::new();
    for operand in &expr[1..] {
        let value = crate::evaluate(operand, ctx)?;
        for (k, v) in util::as_obj(&value)? {
            result.insert(k.clone(), v.clone());
        }
    }
    Ok(ExprValue::Json(Value::Object(result)))
}

/// Builds an object from alternating key/value operands:
/// `["obj", "name", expr1, "age", expr2]`. Keys are evaluated and must be
/// strings; the expression grammar has no literal-object form, so this is the
/// way a `map` body produces a reshaped object.
fn obj_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let operands = &expr[1..];
    if operands.len() % 2 != 0 {
        return Err(ExprError::Arity(
            "\"obj\" operator expects an even number of operands.".to_string(),
        ));
    }
    let mut result = Map::new();
    for pair in operands.chunks(2) {
        let key = crate::evaluate(&pair[0], ctx)?;
        let key = util::as_str(&key)?.to_string();
        let value = crate::evaluate(&pair[1], ctx)?.into_json();
        result.insert(key, value);
    }
    Ok(ExprValue::Json(Value::Object(result)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "get",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: get_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "pick",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: pick_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "omit",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: omit_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "keys",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: keys_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "values",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: values_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "entries",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: entries_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "merge",
            aliases: &[],
            arity: Arity::Variadic,
            eval_fn: merge_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "obj",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: obj_eval,
            impure: false,
        }),
    ]
}

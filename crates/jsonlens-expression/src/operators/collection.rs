//! Collection operators: element-wise iteration with a named loop binding,
//! plus field-keyed aggregation.
//!
//! Iterating operators take `[op, array, varname, body]`: the loop variable
//! is bound for each element while `body` is evaluated, then restored to
//! whatever it was before the loop, so nested loops over the same name work.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::{Map, Value};
use std::sync::Arc;

fn varname(operand: &Value, ctx: &mut EvalCtx<'_>) -> Result<String, ExprError> {
    match crate::evaluate(operand, ctx)? {
        ExprValue::Json(Value::String(s)) => Ok(s),
        _ => Err(ExprError::VarnameMustBeString),
    }
}

/// Runs `body` once per element with `name` bound, restoring the prior
/// binding afterwards even on error.
fn each<F>(
    ctx: &mut EvalCtx<'_>,
    name: &str,
    items: &[Value],
    mut body: F,
) -> Result<(), ExprError>
where
    F: FnMut(&mut EvalCtx<'_>) -> Result<(), ExprError>,
{
    let saved = ctx.vars.get(name);
    let mut result = Ok(());
    for item in items {
        result = ctx
            .vars
            .set(name, ExprValue::Json(item.clone()))
            .and_then(|()| body(&mut *ctx));
        if result.is_err() {
            break;
        }
    }
    match saved {
        ExprValue::Undefined => {
            ctx.vars.del(name);
        }
        prior => ctx.vars.set(name, prior)?,
    }
    result
}

/// Plain object member access used by the field-keyed operators.
fn field<'v>(item: &'v Value, key: &str) -> Option<&'v Value> {
    item.as_object().and_then(|obj| obj.get(key))
}

fn filter_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let name = varname(&expr[2], ctx)?;
    let mut result = Vec::new();
    each(ctx, &name, &items, |ctx| {
        let keep = crate::evaluate(&expr[3], ctx)?;
        if util::is_truthy(&keep) {
            result.push(ctx.vars.get(&name).into_json());
        }
        Ok(())
    })?;
    Ok(ExprValue::Json(Value::Array(result)))
}

fn map_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let name = varname(&expr[2], ctx)?;
    let mut result = Vec::with_capacity(items.len());
    each(ctx, &name, &items, |ctx| {
        result.push(crate::evaluate(&expr[3], ctx)?.into_json());
        Ok(())
    })?;
    Ok(ExprValue::Json(Value::Array(result)))
}

fn flat_map_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let name = varname(&expr[2], ctx)?;
    let mut result = Vec::new();
    each(ctx, &name, &items, |ctx| {
        match crate::evaluate(&expr[3], ctx)? {
            ExprValue::Json(Value::Array(inner)) => result.extend(inner),
            ExprValue::Undefined => {}
            other => result.push(other.into_json()),
        }
        Ok(())
    })?;
    Ok(ExprValue::Json(Value::Array(result)))
}

fn reduce_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let initial = crate::evaluate(&expr[2], ctx)?;
    let acc_name = varname(&expr[3], ctx)?;
    let item_name = varname(&expr[4], ctx)?;

    let saved_acc = ctx.vars.get(&acc_name);
    ctx.vars.set(&acc_name, initial)?;
    let result = each(ctx, &item_name, &items, |ctx| {
        let next = crate::evaluate(&expr[5], ctx)?;
        ctx.vars.set(&acc_name, next)?;
        Ok(())
    });
    let acc = ctx.vars.get(&acc_name);
    match saved_acc {
        ExprValue::Undefined => {
            ctx.vars.del(&acc_name);
        }
        prior => ctx.vars.set(&acc_name, prior)?,
    }
    result?;
    Ok(acc)
}

fn sort_by_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let mut items = util::as_arr(&arr)?.clone();
    let key = crate::evaluate(&expr[2], ctx)?;
    let key = util::as_str(&key)?.to_string();
    items.sort_by(|a, b| {
        let ka = field(a, &key)
            .map(|v| ExprValue::Json(v.clone()))
            .unwrap_or(ExprValue::Undefined);
        let kb = field(b, &key)
            .map(|v| ExprValue::Json(v.clone()))
            .unwrap_or(ExprValue::Undefined);
        util::cmp_values(&ka, &kb)
    });
    Ok(ExprValue::Json(Value::Array(items)))
}

fn group_by_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let key = crate::evaluate(&expr[2], ctx)?;
    let key = util::as_str(&key)?.to_string();
    let mut groups: Map<String, Value> = Map::new();
    for item in items {
        let group = field(&item, &key)
            .map(|v| util::str_val(&ExprValue::Json(v.clone())))
            .unwrap_or_else(|| "undefined".to_string());
        match groups.entry(group).or_insert_with(|| Value::Array(vec![])) {
            Value::Array(bucket) => bucket.push(item),
            _ => unreachable!(),
        }
    }
    Ok(ExprValue::Json(Value::Object(groups)))
}

fn uniq_by_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let key = crate::evaluate(&expr[2], ctx)?;
    let key = util::as_str(&key)?.to_string();
    let mut seen: Vec<Value> = Vec::new();
    let mut result = Vec::new();
    for item in items {
        let k = field(&item, &key).cloned().unwrap_or(Value::Null);
        if !seen.contains(&k) {
            seen.push(k);
            result.push(item);
        }
    }
    Ok(ExprValue::Json(Value::Array(result)))
}

fn count_by_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let key = crate::evaluate(&expr[2], ctx)?;
    let key = util::as_str(&key)?.to_string();
    let mut counts: Map<String, Value> = Map::new();
    for item in items {
        let group = field(&item, &key)
            .map(|v| util::str_val(&ExprValue::Json(v.clone())))
            .unwrap_or_else(|| "undefined".to_string());
        let count = counts
            .entry(group)
            .or_insert_with(|| Value::Number(0.into()));
        let next = count.as_i64().unwrap_or(0) + 1;
        *count = Value::Number(next.into());
    }
    Ok(ExprValue::Json(Value::Object(counts)))
}

fn key_by_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let key = crate::evaluate(&expr[2], ctx)?;
    let key = util::as_str(&key)?.to_string();
    let mut result: Map<String, Value> = Map::new();
    // Last occurrence wins on key collisions.
    for item in items {
        let k = field(&item, &key)
            .map(|v| util::str_val(&ExprValue::Json(v.clone())))
            .unwrap_or_else(|| "undefined".to_string());
        result.insert(k, item);
    }
    Ok(ExprValue::Json(Value::Object(result)))
}

fn pluck_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let items = util::as_arr(&arr)?.clone();
    let key = crate::evaluate(&expr[2], ctx)?;
    let key = util::as_str(&key)?.to_string();
    let result: Vec<Value> = items
        .iter()
        .map(|item| field(item, &key).cloned().unwrap_or(Value::Null))
        .collect();
    Ok(ExprValue::Json(Value::Array(result)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "filter",
            aliases: &[],
            arity: Arity::Fixed(3),
            eval_fn: filter_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "map",
            aliases: &[],
            arity: Arity::Fixed(3),
            eval_fn: map_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "flatMap",
            aliases: &[],
            arity: Arity::Fixed(3),
            eval_fn: flat_map_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "reduce",
            aliases: &[],
            arity: Arity::Fixed(5),
            eval_fn: reduce_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "sortBy",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: sort_by_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "groupBy",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: group_by_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "uniqBy",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: uniq_by_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "countBy",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: count_by_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "keyBy",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: key_by_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "pluck",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: pluck_eval,
            impure: false,
        }),
    ]
}

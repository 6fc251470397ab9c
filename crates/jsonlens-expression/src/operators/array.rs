//! Array operators.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::Value;
use std::sync::Arc;

fn concat_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let mut result = Vec::new();
    for operand in &expr[1..] {
        let arr = crate::evaluate(operand, ctx)?;
        result.extend(util::as_arr(&arr)?.iter().cloned());
    }
    Ok(ExprValue::Json(Value::Array(result)))
}

fn push_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let mut result = util::as_arr(&arr)?.clone();
    for operand in &expr[2..] {
        result.push(crate::evaluate(operand, ctx)?.into_json());
    }
    Ok(ExprValue::Json(Value::Array(result)))
}

fn reverse_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let mut result = util::as_arr(&arr)?.clone();
    result.reverse();
    Ok(ExprValue::Json(Value::Array(result)))
}

fn slice_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let arr = util::as_arr(&arr)?;
    let len = arr.len() as i64;
    let from = util::num(&crate::evaluate(&expr[2], ctx)?) as i64;
    let to = if expr.len() > 3 {
        util::num(&crate::evaluate(&expr[3], ctx)?) as i64
    } else {
        len
    };
    let clamp = |i: i64| -> usize {
        if i < 0 {
            (len + i).max(0) as usize
        } else {
            i.min(len) as usize
        }
    };
    let start = clamp(from);
    let end = clamp(to);
    let result = if start >= end {
        Vec::new()
    } else {
        arr[start..end].to_vec()
    };
    Ok(ExprValue::Json(Value::Array(result)))
}

fn in_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let needle = crate::evaluate(&expr[2], ctx)?.into_json();
    let found = util::as_arr(&arr)?.iter().any(|item| *item == needle);
    Ok(ExprValue::from(found))
}

fn index_of_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let needle = crate::evaluate(&expr[2], ctx)?.into_json();
    let index = util::as_arr(&arr)?
        .iter()
        .position(|item| *item == needle)
        .map(|i| i as i64)
        .unwrap_or(-1);
    Ok(util::i64_to_value(index))
}

fn head_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let arr = crate::evaluate(&expr[1], ctx)?;
    let arr = util::as_arr(&arr)?;
    let count = util::num(&crate::evaluate(&expr[2], ctx)?) as i64;
    let result = if count >= 0 {
        arr[..(count as usize).min(arr.len())].to_vec()
    } else {
        // Negative count takes from the tail.
        let start = (arr.len() as i64 + count).max(0) as usize;
        arr[start..].to_vec()
    };
    Ok(ExprValue::Json(Value::Array(result)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "concat",
            aliases: &["++"],
            arity: Arity::Variadic,
            eval_fn: concat_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "push",
            aliases: &[],
            arity: Arity::Range(2, None),
            eval_fn: push_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "reverse",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: reverse_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "slice",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: slice_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "in",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: in_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "indexOf",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: index_of_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "head",
            aliases: &["take"],
            arity: Arity::Fixed(2),
            eval_fn: head_eval,
            impure: false,
        }),
    ]
}

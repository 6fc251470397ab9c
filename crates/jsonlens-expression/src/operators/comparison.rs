//! Comparison operators.
//!
//! `==`/`!=` are deep structural equality; the relational operators compare
//! numbers numerically and everything else lexicographically.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

fn eq_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let a = crate::evaluate(&expr[1], ctx)?;
    let b = crate::evaluate(&expr[2], ctx)?;
    Ok(ExprValue::from(a == b))
}

fn ne_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let a = crate::evaluate(&expr[1], ctx)?;
    let b = crate::evaluate(&expr[2], ctx)?;
    Ok(ExprValue::from(a != b))
}

fn relational(
    expr: &[Value],
    ctx: &mut EvalCtx<'_>,
    accept: fn(Ordering) -> bool,
) -> Result<ExprValue, ExprError> {
    let a = crate::evaluate(&expr[1], ctx)?;
    let b = crate::evaluate(&expr[2], ctx)?;
    Ok(ExprValue::from(accept(util::cmp_values(&a, &b))))
}

fn gt_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    relational(expr, ctx, |o| o == Ordering::Greater)
}

fn gte_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    relational(expr, ctx, |o| o != Ordering::Less)
}

fn lt_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    relational(expr, ctx, |o| o == Ordering::Less)
}

fn lte_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    relational(expr, ctx, |o| o != Ordering::Greater)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "==",
            aliases: &["eq"],
            arity: Arity::Fixed(2),
            eval_fn: eq_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "!=",
            aliases: &["ne"],
            arity: Arity::Fixed(2),
            eval_fn: ne_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: ">",
            aliases: &["gt"],
            arity: Arity::Fixed(2),
            eval_fn: gt_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: ">=",
            aliases: &["gte"],
            arity: Arity::Fixed(2),
            eval_fn: gte_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "<",
            aliases: &["lt"],
            arity: Arity::Fixed(2),
            eval_fn: lt_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "<=",
            aliases: &["lte"],
            arity: Arity::Fixed(2),
            eval_fn: lte_eval,
            impure: false,
        }),
    ]
}

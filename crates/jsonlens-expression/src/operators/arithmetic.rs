//! Arithmetic operators.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::Value;
use std::sync::Arc;

fn add_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    expr[1..]
        .iter()
        .try_fold(0.0f64, |acc, e| {
            Ok(util::num(&crate::evaluate(e, ctx)?) + acc)
        })
        .map(util::num_to_value)
}

fn subtract_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let a = util::num(&crate::evaluate(&expr[1], ctx)?);
    let b = util::num(&crate::evaluate(&expr[2], ctx)?);
    Ok(util::num_to_value(a - b))
}

fn multiply_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    expr[1..]
        .iter()
        .try_fold(1.0f64, |acc, e| {
            Ok(util::num(&crate::evaluate(e, ctx)?) * acc)
        })
        .map(util::num_to_value)
}

fn divide_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let a = crate::evaluate(&expr[1], ctx)?;
    let b = crate::evaluate(&expr[2], ctx)?;
    util::slash(&a, &b)
}

fn mod_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let a = crate::evaluate(&expr[1], ctx)?;
    let b = crate::evaluate(&expr[2], ctx)?;
    util::modulo(&a, &b)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "+",
            aliases: &["add"],
            arity: Arity::Variadic,
            eval_fn: add_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "-",
            aliases: &["subtract"],
            arity: Arity::Fixed(2),
            eval_fn: subtract_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "*",
            aliases: &["multiply"],
            arity: Arity::Variadic,
            eval_fn: multiply_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "/",
            aliases: &["divide"],
            arity: Arity::Fixed(2),
            eval_fn: divide_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "%",
            aliases: &["mod"],
            arity: Arity::Fixed(2),
            eval_fn: mod_eval,
            impure: false,
        }),
    ]
}

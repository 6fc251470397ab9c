//! Logical operators. Operands are evaluated left to right with
//! short-circuiting; the result is always a boolean.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::Value;
use std::sync::Arc;

fn and_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    for operand in &expr[1..] {
        if !util::is_truthy(&crate::evaluate(operand, ctx)?) {
            return Ok(ExprValue::from(false));
        }
    }
    Ok(ExprValue::from(true))
}

fn or_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    for operand in &expr[1..] {
        if util::is_truthy(&crate::evaluate(operand, ctx)?) {
            return Ok(ExprValue::from(true));
        }
    }
    Ok(ExprValue::from(false))
}

fn not_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let v = crate::evaluate(&expr[1], ctx)?;
    Ok(ExprValue::from(!util::is_truthy(&v)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "and",
            aliases: &["&&"],
            arity: Arity::Variadic,
            eval_fn: and_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "or",
            aliases: &["||"],
            arity: Arity::Variadic,
            eval_fn: or_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "not",
            aliases: &["!"],
            arity: Arity::Fixed(1),
            eval_fn: not_eval,
            impure: false,
        }),
    ]
}

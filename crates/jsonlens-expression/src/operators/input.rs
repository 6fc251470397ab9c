//! Input and variable access.
//!
//! `["$", "$.users"]` resolves a full path against the input document;
//! `["var", "u.age"]` resolves a loop binding, with an optional path into it
//! after the binding name.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use jsonlens_json_path::get_value;
use serde_json::Value;
use std::sync::Arc;

fn input_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let path = crate::evaluate(&expr[1], ctx)?;
    let path = util::as_str(&path)?;
    match &ctx.vars.env {
        ExprValue::Json(env) => Ok(get_value(env, path)
            .map(|found| ExprValue::Json(found.clone()))
            .unwrap_or(ExprValue::Undefined)),
        ExprValue::Undefined => Ok(ExprValue::Undefined),
    }
}

fn var_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let reference = crate::evaluate(&expr[1], ctx)?;
    match &reference {
        ExprValue::Json(Value::String(s)) => Ok(ctx.vars.find(s)),
        _ => Err(ExprError::VarnameMustBeString),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "$",
            aliases: &["data"],
            arity: Arity::Fixed(1),
            eval_fn: input_eval,
            impure: true,
        }),
        Arc::new(OperatorDefinition {
            name: "var",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: var_eval,
            impure: true,
        }),
    ]
}

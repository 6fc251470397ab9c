//! The main `evaluate` entry point.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{assert_arity, ExprValue};
use serde_json::Value;
use std::time::Instant;

/// Evaluates a JSON expression against an execution context.
///
/// - Non-array values are returned as literals.
/// - Single-element arrays `[x]` return `x` as a literal.
/// - Multi-element arrays `[operator, ...operands]` dispatch to the matching
///   operator.
///
/// Every dispatch checks the context deadline first, so deeply nested or
/// large-collection expressions cannot outrun the caller's time budget.
pub fn evaluate(expr: &Value, ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    match expr {
        Value::Array(arr) => {
            if arr.is_empty() {
                return Ok(ExprValue::Json(Value::Array(vec![])));
            }
            if arr.len() == 1 {
                // Single-element array: a literal wrapper.
                return Ok(ExprValue::Json(arr[0].clone()));
            }

            if let Some(deadline) = ctx.deadline {
                if Instant::now() >= deadline {
                    return Err(ExprError::DeadlineExceeded);
                }
            }

            let op_key = match &arr[0] {
                Value::String(s) => s.as_str(),
                _ => {
                    return Err(ExprError::UnknownOperator(
                        serde_json::to_string(expr).unwrap_or_default(),
                    ))
                }
            };

            let def = ctx.operators.get(op_key).cloned().ok_or_else(|| {
                ExprError::UnknownOperator(serde_json::to_string(expr).unwrap_or_default())
            })?;

            assert_arity(def.name, &def.arity, arr.len())?;
            (def.eval_fn)(arr, ctx)
        }
        other => Ok(ExprValue::Json(other.clone())),
    }
}

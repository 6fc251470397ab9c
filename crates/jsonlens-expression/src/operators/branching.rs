//! Branching. Only the taken branch is evaluated.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::Value;
use std::sync::Arc;

fn if_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let condition = crate::evaluate(&expr[1], ctx)?;
    if util::is_truthy(&condition) {
        crate::evaluate(&expr[2], ctx)
    } else {
        crate::evaluate(&expr[3], ctx)
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "if",
        aliases: &["?"],
        arity: Arity::Fixed(3),
        eval_fn: if_eval,
        impure: false,
    })]
}

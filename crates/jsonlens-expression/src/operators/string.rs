//! String operators.

use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use crate::util;
use serde_json::Value;
use std::sync::Arc;

fn str_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let mut out = String::new();
    for operand in &expr[1..] {
        out.push_str(&util::str_val(&crate::evaluate(operand, ctx)?));
    }
    Ok(ExprValue::from(out))
}

fn lower_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let v = crate::evaluate(&expr[1], ctx)?;
    Ok(ExprValue::from(util::as_str(&v)?.to_lowercase()))
}

fn upper_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let v = crate::evaluate(&expr[1], ctx)?;
    Ok(ExprValue::from(util::as_str(&v)?.to_uppercase()))
}

fn trim_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let v = crate::evaluate(&expr[1], ctx)?;
    Ok(ExprValue::from(util::as_str(&v)?.trim().to_string()))
}

fn substr_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let s = crate::evaluate(&expr[1], ctx)?;
    let string = util::str_val(&s);
    let chars: Vec<char> = string.chars().collect();
    let len = chars.len() as i64;
    let from = util::num(&crate::evaluate(&expr[2], ctx)?) as i64;
    let to = if expr.len() > 3 {
        util::num(&crate::evaluate(&expr[3], ctx)?) as i64
    } else {
        len
    };

    // Negative indices count from the end, like `str.slice`.
    let clamp = |i: i64| -> usize {
        if i < 0 {
            (len + i).max(0) as usize
        } else {
            i.min(len) as usize
        }
    };
    let start = clamp(from);
    let end = clamp(to);
    if start >= end {
        return Ok(ExprValue::from(""));
    }
    Ok(ExprValue::from(chars[start..end].iter().collect::<String>()))
}

fn matches_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let subject = crate::evaluate(&expr[1], ctx)?;
    let pattern = crate::evaluate(&expr[2], ctx)?;
    let pattern = util::as_str(&pattern)?;
    let text = util::str_val(&subject);
    if let Some(factory) = &ctx.create_pattern {
        let predicate = factory(pattern);
        return Ok(ExprValue::from(predicate(&text)));
    }
    let re = regex::Regex::new(pattern)
        .map_err(|e| ExprError::InvalidPattern(e.to_string()))?;
    Ok(ExprValue::from(re.is_match(&text)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "str",
            aliases: &[],
            arity: Arity::Variadic,
            eval_fn: str_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "lower",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: lower_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "upper",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: upper_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "trim",
            aliases: &[],
            arity: Arity::Fixed(1),
            eval_fn: trim_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "substr",
            aliases: &[],
            arity: Arity::Range(2, Some(3)),
            eval_fn: substr_eval,
            impure: false,
        }),
        Arc::new(OperatorDefinition {
            name: "matches",
            aliases: &[],
            arity: Arity::Fixed(2),
            eval_fn: matches_eval,
            impure: false,
        }),
    ]
}

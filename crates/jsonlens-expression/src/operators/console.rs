//! Console capture operators. Each call appends an entry to the context's
//! log sink and yields the absent value.

use crate::console::{ConsoleEntry, LogLevel};
use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, ExprValue, OperatorDefinition};
use serde_json::Value;
use std::sync::Arc;

fn log_at(level: LogLevel, expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    let mut args = Vec::with_capacity(expr.len().saturating_sub(1));
    for operand in &expr[1..] {
        args.push(crate::evaluate(operand, ctx)?.into_json());
    }
    ctx.logs.push(ConsoleEntry::new(level, args));
    Ok(ExprValue::Undefined)
}

fn log_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    log_at(LogLevel::Log, expr, ctx)
}

fn info_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    log_at(LogLevel::Info, expr, ctx)
}

fn warn_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    log_at(LogLevel::Warn, expr, ctx)
}

fn error_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<ExprValue, ExprError> {
    log_at(LogLevel::Error, expr, ctx)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "console.log",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: log_eval,
            impure: true,
        }),
        Arc::new(OperatorDefinition {
            name: "console.info",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: info_eval,
            impure: true,
        }),
        Arc::new(OperatorDefinition {
            name: "console.warn",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: warn_eval,
            impure: true,
        }),
        Arc::new(OperatorDefinition {
            name: "console.error",
            aliases: &[],
            arity: Arity::Any,
            eval_fn: error_eval,
            impure: true,
        }),
    ]
}

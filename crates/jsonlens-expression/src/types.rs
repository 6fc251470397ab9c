use crate::error::ExprError;
use crate::eval_ctx::EvalCtx;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// An evaluation result: any JSON value, or the absent value that JSON has no
/// spelling for (a missing field, an out-of-range index, a `console.*` call).
#[derive(Debug, Clone)]
pub enum ExprValue {
    Undefined,
    Json(Value),
}

impl ExprValue {
    /// Collapses `Undefined` to `null` for contexts that must produce JSON.
    pub fn into_json(self) -> Value {
        match self {
            ExprValue::Undefined => Value::Null,
            ExprValue::Json(v) => v,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, ExprValue::Undefined)
    }
}

impl PartialEq for ExprValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExprValue::Undefined, ExprValue::Undefined) => true,
            (ExprValue::Json(a), ExprValue::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Value> for ExprValue {
    fn from(v: Value) -> Self {
        ExprValue::Json(v)
    }
}

impl From<bool> for ExprValue {
    fn from(b: bool) -> Self {
        ExprValue::Json(Value::Bool(b))
    }
}

impl From<f64> for ExprValue {
    fn from(n: f64) -> Self {
        ExprValue::Json(serde_json::json!(n))
    }
}

impl From<i64> for ExprValue {
    fn from(n: i64) -> Self {
        ExprValue::Json(Value::Number(serde_json::Number::from(n)))
    }
}

impl From<String> for ExprValue {
    fn from(s: String) -> Self {
        ExprValue::Json(Value::String(s))
    }
}

impl From<&str> for ExprValue {
    fn from(s: &str) -> Self {
        ExprValue::Json(Value::String(s.to_string()))
    }
}

/// Operator arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    /// Skip the arity check.
    Any,
    /// Exactly `n` operands.
    Fixed(usize),
    /// At least 2 operands.
    Variadic,
    /// Between `min` and `max` operands. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

/// The type of an operator evaluation function.
///
/// `expr` is the full expression array (including the operator name at index 0).
/// Operands are at `expr[1..]`.
pub type EvalFn = for<'a> fn(&[Value], &mut EvalCtx<'a>) -> Result<ExprValue, ExprError>;

pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub eval_fn: EvalFn,
    /// Impure operators read or mutate the evaluation context beyond their
    /// operands (input access, console capture).
    pub impure: bool,
}

/// Map of operator name/alias -> definition.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Asserts that an expression has the correct arity.
pub fn assert_arity(operator: &str, arity: &Arity, expr_len: usize) -> Result<(), ExprError> {
    match arity {
        Arity::Any => Ok(()),
        Arity::Fixed(n) => {
            if expr_len != n + 1 {
                Err(ExprError::Arity(format!(
                    "\"{}\" operator expects {} operands.",
                    operator, n
                )))
            } else {
                Ok(())
            }
        }
        Arity::Variadic => {
            if expr_len < 3 {
                Err(ExprError::Arity(format!(
                    "\"{}\" operator expects at least two operands.",
                    operator
                )))
            } else {
                Ok(())
            }
        }
        Arity::Range(min, max) => {
            if expr_len < min + 1 {
                Err(ExprError::Arity(format!(
                    "\"{}\" operator expects at least {} operands.",
                    operator, min
                )))
            } else if let Some(max) = max {
                if expr_len > max + 1 {
                    return Err(ExprError::Arity(format!(
                        "\"{}\" operator expects at most {} operands.",
                        operator, max
                    )));
                }
                Ok(())
            } else {
                Ok(())
            }
        }
    }
}

/// Builds an `OperatorMap` from a list of operator definitions.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    let mut map = HashMap::new();
    for op in operators {
        map.insert(op.name.to_string(), Arc::clone(&op));
        for alias in op.aliases {
            map.insert(alias.to_string(), Arc::clone(&op));
        }
    }
    map
}

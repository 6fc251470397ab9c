//! Sandboxed transform expressions over JSON documents.
//!
//! # Overview
//!
//! Transform code is itself JSON: an array of the form
//! `[operator, ...operands]`. Non-arrays and single-element arrays are
//! literals, so data can be quoted without escaping. Evaluation is a plain
//! tree walk over an operator table; it can read the input document handed
//! to it and nothing else, and an optional deadline bounds how long it may
//! run.
//!
//! # Example
//!
//! ```
//! use jsonlens_expression::{evaluate, operators_map, EvalCtx, ExprValue, Vars};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let expr = json!(["+", 1, 2]);
//! let mut vars = Vars::new(json!(null));
//! let ops = Arc::new(operators_map());
//! let mut ctx = EvalCtx::new(&mut vars, ops);
//! let result = evaluate(&expr, &mut ctx).unwrap();
//!
//! assert_eq!(result, ExprValue::Json(json!(3)));
//! ```

pub mod console;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod types;
pub mod util;
pub mod vars;

pub use console::{format_arg, ConsoleEntry, LogLevel};
pub use error::ExprError;
pub use eval_ctx::EvalCtx;
pub use evaluate::evaluate;
pub use operators::operators_map;
pub use types::{Arity, ExprValue, OperatorDefinition, OperatorMap};
pub use vars::Vars;

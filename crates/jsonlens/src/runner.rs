//! Bounded transform execution.
//!
//! A transform runs on its own worker thread with two independent bounds: an
//! in-language deadline the interpreter checks on every operator dispatch,
//! and a wall-clock `recv_timeout` on the channel the worker reports through.
//! The thread cannot be forcibly killed, so on timeout the runner stops
//! waiting and the eventual result is dropped with the channel.

use jsonlens_expression::{evaluate, operators_map, ConsoleEntry, EvalCtx, ExprValue, Vars};
use serde_json::Value;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Wall-clock budget for a single transform run.
pub const TRANSFORM_TIMEOUT: Duration = Duration::from_secs(5);

/// Slack past the in-language deadline before the channel wait gives up,
/// covering thread spawn and result marshalling.
const RECV_GRACE: Duration = Duration::from_millis(250);

/// What a single transform run produced. Exactly one of `result`/`error` is
/// set; `logs` carries whatever console output was captured before the run
/// finished or failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    pub result: Option<Value>,
    pub error: Option<String>,
    pub logs: Vec<ConsoleEntry>,
}

impl TransformOutcome {
    fn failure(error: String, logs: Vec<ConsoleEntry>) -> Self {
        TransformOutcome {
            result: None,
            error: Some(error),
            logs,
        }
    }
}

/// Runs `code` against `data` with the default budget.
pub fn run_transform(code: &str, data: &Value) -> TransformOutcome {
    run_transform_with_timeout(code, data, TRANSFORM_TIMEOUT)
}

/// Runs `code` against `data`, bounding execution by `budget`.
pub fn run_transform_with_timeout(code: &str, data: &Value, budget: Duration) -> TransformOutcome {
    let expr: Value = match serde_json::from_str(code) {
        Ok(expr) => expr,
        Err(e) => return TransformOutcome::failure(e.to_string(), Vec::new()),
    };

    let data = data.clone();
    let deadline = Instant::now() + budget;
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut vars = Vars::new(data);
        let ops = std::sync::Arc::new(operators_map());
        let mut ctx = EvalCtx::new(&mut vars, ops).with_deadline(deadline);
        let result = evaluate(&expr, &mut ctx);
        let logs = std::mem::take(&mut ctx.logs);
        // The receiver may be gone after a timeout; nothing to do then.
        let _ = tx.send((result, logs));
    });

    match rx.recv_timeout(budget + RECV_GRACE) {
        Ok((Ok(value), logs)) => TransformOutcome {
            result: Some(match value {
                ExprValue::Undefined => Value::Null,
                ExprValue::Json(v) => v,
            }),
            error: None,
            logs,
        },
        Ok((Err(e), logs)) => TransformOutcome::failure(e.to_string(), logs),
        Err(mpsc::RecvTimeoutError::Timeout) => TransformOutcome::failure(
            format!("Transform timed out after {}s", budget.as_secs()),
            Vec::new(),
        ),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            TransformOutcome::failure("Transform execution failed".to_string(), Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonlens_expression::LogLevel;
    use serde_json::json;

    #[test]
    fn successful_run_returns_the_result() {
        let data = json!({"users": [{"name": "Ada", "role": "admin"}, {"name": "Bob", "role": "user"}]});
        let code = r#"["filter", ["$", "$.users"], "u", ["==", ["var", "u.role"], "admin"]]"#;
        let outcome = run_transform(code, &data);
        assert_eq!(outcome.error, None);
        assert_eq!(outcome.result, Some(json!([{"name": "Ada", "role": "admin"}])));
        assert!(outcome.logs.is_empty());
    }

    #[test]
    fn parse_failure_is_a_transform_error() {
        let outcome = run_transform("not json at all", &json!(null));
        assert_eq!(outcome.result, None);
        assert!(outcome.error.is_some());
    }

    #[test]
    fn evaluation_errors_carry_the_interpreter_message() {
        let outcome = run_transform(r#"["/", 1, 0]"#, &json!(null));
        assert_eq!(outcome.result, None);
        assert_eq!(outcome.error.as_deref(), Some("DIVISION_BY_ZERO"));
    }

    #[test]
    fn console_output_is_captured() {
        let code = r#"["console.log", "hello", ["+", 1, 1]]"#;
        let outcome = run_transform(code, &json!(null));
        // A bare console call yields the absent value, reported as null.
        assert_eq!(outcome.result, Some(json!(null)));
        assert_eq!(outcome.logs.len(), 1);
        assert_eq!(outcome.logs[0].level, LogLevel::Log);
        assert_eq!(outcome.logs[0].args, vec![json!("hello"), json!(2)]);
    }

    #[test]
    fn zero_budget_reports_a_timeout() {
        let data = json!({"xs": [1, 2, 3]});
        let code = r#"["map", ["$", "$.xs"], "x", ["*", ["var", "x"], 2]]"#;
        let outcome = run_transform_with_timeout(code, &data, Duration::ZERO);
        assert_eq!(outcome.result, None);
        let error = outcome.error.unwrap();
        assert!(
            error.contains("timed out") || error == "Transform deadline exceeded",
            "unexpected error: {error}"
        );
    }

    #[test]
    fn runs_are_isolated_from_each_other() {
        let data = json!({"n": 1});
        // The first run binds a loop variable; the second must not see it.
        run_transform(r#"["map", [[1]], "leak", ["var", "leak"]]"#, &data);
        let outcome = run_transform(r#"["var", "leak"]"#, &data);
        assert_eq!(outcome.result, Some(json!(null)));
    }
}

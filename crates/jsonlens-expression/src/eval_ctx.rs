use crate::console::ConsoleEntry;
use crate::types::OperatorMap;
use crate::vars::Vars;
use std::sync::Arc;
use std::time::Instant;

pub type PatternPredicate = dyn Fn(&str) -> bool + Send + Sync;
pub type PatternFactory = dyn Fn(&str) -> Box<PatternPredicate> + Send + Sync;

/// The execution context passed to every operator eval function.
///
/// A context is built fresh per evaluation; nothing in it outlives the run,
/// so one transform can never observe state left behind by another.
pub struct EvalCtx<'a> {
    /// The variable store (input document + named bindings).
    pub vars: &'a mut Vars,
    /// The operator map used for recursive evaluation.
    pub operators: Arc<OperatorMap>,
    /// Optional pattern factory overriding the default `matches` engine.
    pub create_pattern: Option<Arc<PatternFactory>>,
    /// Wall-clock cutoff checked on every operator dispatch.
    pub deadline: Option<Instant>,
    /// Captured `console.*` output, in call order.
    pub logs: Vec<ConsoleEntry>,
}

impl<'a> EvalCtx<'a> {
    pub fn new(vars: &'a mut Vars, operators: Arc<OperatorMap>) -> Self {
        EvalCtx {
            vars,
            operators,
            create_pattern: None,
            deadline: None,
            logs: Vec::new(),
        }
    }

    pub fn with_pattern(mut self, create_pattern: Arc<PatternFactory>) -> Self {
        self.create_pattern = Some(create_pattern);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

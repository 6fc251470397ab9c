use crate::error::ExprError;
use crate::types::ExprValue;
use jsonlens_json_path::get_value;
use serde_json::Value;
use std::collections::HashMap;

/// Variable store: the root input document plus named loop bindings.
pub struct Vars {
    /// The input document, accessed via the empty name.
    pub env: ExprValue,
    vars: HashMap<String, ExprValue>,
}

impl Vars {
    pub fn new(env: Value) -> Self {
        Vars {
            env: ExprValue::Json(env),
            vars: HashMap::new(),
        }
    }

    /// Returns the value for `name`; the empty name returns the environment.
    /// Unbound names are `Undefined`.
    pub fn get(&self, name: &str) -> ExprValue {
        if name.is_empty() {
            return self.env.clone();
        }
        self.vars.get(name).cloned().unwrap_or(ExprValue::Undefined)
    }

    pub fn set(&mut self, name: &str, value: ExprValue) -> Result<(), ExprError> {
        if name.is_empty() {
            return Err(ExprError::InvalidVarname);
        }
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        if name.is_empty() {
            return true;
        }
        self.vars.contains_key(name)
    }

    /// Deletes a named binding. Returns false for the empty name.
    pub fn del(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.vars.remove(name).is_some()
    }

    /// Resolves a dotted reference like `"u.age"` or `"row[0].id"`: the text
    /// up to the first `.` or `[` names a binding, the rest is a path into it.
    pub fn find(&self, reference: &str) -> ExprValue {
        let split = reference
            .find(['.', '['])
            .unwrap_or(reference.len());
        let (name, rest) = reference.split_at(split);
        let bound = self.get(name);
        if rest.is_empty() {
            return bound;
        }
        match &bound {
            ExprValue::Json(v) => get_value(v, rest)
                .map(|found| ExprValue::Json(found.clone()))
                .unwrap_or(ExprValue::Undefined),
            ExprValue::Undefined => ExprValue::Undefined,
        }
    }
}

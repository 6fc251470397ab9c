//! Operator definitions, grouped by family.

pub mod arithmetic;
pub mod array;
pub mod branching;
pub mod collection;
pub mod comparison;
pub mod console;
pub mod input;
pub mod logical;
pub mod object;
pub mod string;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::Arc;

/// All operators combined.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(arithmetic::operators());
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(branching::operators());
    ops.extend(string::operators());
    ops.extend(array::operators());
    ops.extend(collection::operators());
    ops.extend(object::operators());
    ops.extend(input::operators());
    ops.extend(console::operators());
    ops
}

/// Builds the full operator map.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}

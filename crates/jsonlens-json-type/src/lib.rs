//! Structural inference over JSON values, with text emitters.
//!
//! The [`shape`] module classifies values, produces canonical display forms,
//! and merges object shapes across array elements; [`typescript`] and [`zod`]
//! consume those shapes to emit a type alias declaration or an importable
//! schema module as plain text.
//!
//! # Example
//!
//! ```
//! use jsonlens_json_type::json_to_typescript;
//! use serde_json::json;
//!
//! let data = json!({"id": 1, "name": "Alice"});
//! let decl = json_to_typescript(&data, "Root");
//! assert!(decl.starts_with("type Root = {"));
//! ```

pub mod shape;
pub use shape::{capitalize, is_primitive, kind_of, merge_shapes, value_display, ValueKind};

pub mod typescript;
pub use typescript::json_to_typescript;

pub mod zod;
pub use zod::json_to_zod;

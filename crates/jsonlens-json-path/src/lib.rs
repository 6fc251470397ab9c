//! Restricted dot/bracket path addressing over JSON documents.
//!
//! Paths are rooted at `$` and address a single location with `.name` and
//! `[n]` / `["key"]` segments. All edits are immutable: operations return a
//! new root and never touch their input.
//!
//! # Example
//!
//! ```
//! use jsonlens_json_path::{get_value, set_value};
//! use serde_json::json;
//!
//! let doc = json!({"users": [{"name": "Alice"}]});
//! let updated = set_value(&doc, "$.users[0].name", json!("Ada"));
//!
//! assert_eq!(get_value(&updated, "$.users[0].name"), Some(&json!("Ada")));
//! assert_eq!(doc["users"][0]["name"], json!("Alice"));
//! ```

mod parse;
pub use parse::{build_path, is_index_segment, is_simple_key, parse_path};

mod ops;
pub use ops::{add_entry, delete_value, get_value, rename_key, set_value, MAX_DEPTH};

mod bulk;
pub use bulk::{bulk_delete_key, bulk_rename_key};

mod flatten;
pub use flatten::get_flattened;

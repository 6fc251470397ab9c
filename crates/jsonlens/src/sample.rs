//! The seed document and transform the store starts from.

use serde_json::{json, Value};

/// Transform that keeps only the admin users of the sample document.
pub const SAMPLE_TRANSFORM: &str =
    r#"["filter", ["$", "$.users"], "u", ["==", ["var", "u.role"], "admin"]]"#;

/// Four users plus a pagination block; enough structure to exercise every
/// view (table columns, nested object node, type inference over a
/// homogeneous array).
pub fn sample_document() -> Value {
    json!({
        "users": [
            { "id": 1, "name": "Alice", "age": 30, "role": "admin" },
            { "id": 2, "name": "Bob", "age": 25, "role": "user" },
            { "id": 3, "name": "Charlie", "age": 35, "role": "user" },
            { "id": 4, "name": "Diana", "age": 28, "role": "admin" }
        ],
        "metadata": {
            "total": 4,
            "page": 1,
            "perPage": 10
        }
    })
}

/// The sample document as two-space pretty JSON, as the editor shows it.
pub fn sample_json_text() -> String {
    serde_json::to_string_pretty(&sample_document()).unwrap_or_default()
}

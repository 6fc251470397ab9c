//! JSON document workbench: one crate tying together path-addressed edits,
//! structural type inference, graph layout, and sandboxed transforms.
//!
//! The heart is [`store::DocumentStore`], which owns the editor text, the
//! parsed document, the transform program, and the run history, and keeps
//! them consistent across edits and transform runs. The surrounding modules
//! are the formats that state is projected into: CSV export, table-view
//! helpers, and a preset library for the transform editor.
//!
//! ```
//! use jsonlens::store::DocumentStore;
//!
//! let mut store = DocumentStore::new();
//! store.run_transform();
//! assert!(store.transformed_json.is_array());
//! ```

pub mod csv;
pub mod presets;
pub mod runner;
pub mod sample;
pub mod store;
pub mod table;

pub use runner::{run_transform, TransformOutcome, TRANSFORM_TIMEOUT};
pub use store::{DocumentStore, HistoryEntry, HISTORY_LIMIT};

//! Error types for field inference

use thiserror::Error;

/// Errors that can occur while inferring a table's fields.
///
/// All variants are fatal for the table being processed: no partial table
/// is emitted once one of these surfaces. A configured unpack field that is
/// simply absent from a row is not an error.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// A source yielded zero usable fields after a full walk
    #[error("empty document: no fields inferred for table {table}")]
    EmptyDocument { table: String },

    /// An unpack field was present but its value is not a JSON-encoded string
    #[error("unpack field {field} exists but is not a JSON-encoded string")]
    NotUnpackable { field: String },

    /// An unpack field's string value failed to parse as JSON
    #[error("malformed embedded JSON in field {field}: {source}")]
    MalformedEmbeddedJson {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A configured unpack field name is not a plain top-level member name
    #[error("invalid unpack field name {0:?}: expected a plain top-level field name")]
    InvalidUnpackField(String),
}

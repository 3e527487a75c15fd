//! Embedded-document unpacking
//!
//! Some sources carry a field whose string value is itself a JSON document
//! (a raw VARIANT column). Unpacking parses that string and re-roots the
//! resulting document under the original field's name so the walker can
//! flatten it into the parent record's namespace.

use serde_json::Value;

use super::error::InferenceError;

/// Look up `field` in `row` and parse its string value as a JSON document.
///
/// Absence is not a failure: the caller simply has nothing to unpack for
/// this row. A present value that is not a JSON-encoded string, or one that
/// fails to parse, is a hard error: it indicates bad input data that must
/// stop the table's processing.
pub fn unpack_embedded(row: &Value, field: &str) -> Result<Option<Value>, InferenceError> {
    let Some(raw) = row.get(field) else {
        return Ok(None);
    };
    let text = raw.as_str().ok_or_else(|| InferenceError::NotUnpackable {
        field: field.to_string(),
    })?;
    let document =
        serde_json::from_str(text).map_err(|source| InferenceError::MalformedEmbeddedJson {
            field: field.to_string(),
            source,
        })?;
    Ok(Some(document))
}

//! JSON to row-document conversion

use serde_json::Value;

use super::error::IngestError;

/// Parse a JSON source into row documents.
///
/// A top-level array yields one row per element; a single top-level object
/// is accepted as a one-row source. Anything else is a terminal error for
/// the source.
pub fn rows_from_json(bytes: &[u8]) -> Result<Vec<Value>, IngestError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Array(rows) => Ok(rows),
        document @ Value::Object(_) => Ok(vec![document]),
        other => Err(IngestError::NotADocumentList(
            crate::inference::structural_kind(&other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_from_json_array() {
        let rows = rows_from_json(br#"[{"a": 1}, {"a": 2}]"#).unwrap();
        assert_eq!(rows, vec![json!({"a": 1}), json!({"a": 2})]);
    }

    #[test]
    fn test_rows_from_json_single_document() {
        let rows = rows_from_json(br#"{"a": 1}"#).unwrap();
        assert_eq!(rows, vec![json!({"a": 1})]);
    }

    #[test]
    fn test_rows_from_json_scalar_rejected() {
        let err = rows_from_json(b"42").unwrap_err();
        assert!(matches!(err, IngestError::NotADocumentList("int")));
    }

    #[test]
    fn test_rows_from_json_malformed() {
        let err = rows_from_json(b"{not json").unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }
}

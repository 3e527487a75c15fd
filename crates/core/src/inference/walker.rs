//! Structural walker and field-inference engine
//!
//! Walks every row of a semi-structured source depth-first, recording one
//! [`Field`] per leaf path and reconciling conflicting types across rows.
//! Objects are transparent (the walk descends into their members), arrays
//! are opaque leaves, and a null observation records the `VARCHAR`
//! placeholder until a concrete kind is seen at the same path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::keys::normalise_key;
use super::types::{Field, SnowflakeType, Table};
use super::unpack::unpack_embedded;

/// A leading `[N]` segment, as produced when rows arrive addressed by their
/// position in a top-level list.
static LEADING_ARRAY_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[\d+\]\.?").unwrap());

/// Statistics from one completed inference pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Rows walked
    pub rows_processed: usize,
    /// Fields present after reconciliation and container cleanup
    pub fields_discovered: usize,
}

/// Strip a single leading array-index marker from a logical path, so that
/// per-row positions collapse to one shared path (`[7].items` -> `items`).
pub fn strip_leading_array_index(path: &str) -> String {
    LEADING_ARRAY_INDEX.replace(path, "").into_owned()
}

/// Whether a path indexes into an array anywhere other than its very start.
/// Such paths are not tracked as fields: the containing array is the leaf.
pub fn contains_non_leading_array(path: &str) -> bool {
    strip_leading_array_index(path).contains('[')
}

impl Table {
    /// Infer this table's fields from a set of row documents.
    ///
    /// Every configured unpack field is parsed and flattened first, its
    /// leaves prefixed with `"<field>:"`; then the row itself is walked.
    /// Rows beyond `config.sample_size` (when non-zero) are ignored.
    pub fn infer_fields(
        &mut self,
        rows: &[Value],
        config: &InferenceConfig,
    ) -> Result<InferenceStats, InferenceError> {
        for field in &config.unpack_fields {
            validate_unpack_field(field)?;
        }

        let mut rows_processed = 0usize;
        for row in rows {
            if config.sample_size > 0 && rows_processed >= config.sample_size {
                break;
            }

            for field in &config.unpack_fields {
                if let Some(document) = unpack_embedded(row, field)? {
                    walk(&document, String::new(), true, &mut |path, value| {
                        self.record(path, value, Some(field));
                    });
                }
            }

            walk(row, String::new(), false, &mut |path, value| {
                self.record(path, value, None);
            });

            if self.fields.is_empty() {
                return Err(InferenceError::EmptyDocument {
                    table: self.name.clone(),
                });
            }
            rows_processed += 1;
        }

        if rows_processed == 0 {
            return Err(InferenceError::EmptyDocument {
                table: self.name.clone(),
            });
        }

        // The container fields themselves are not columns.
        for field in &config.unpack_fields {
            self.fields.remove(field.as_str());
        }

        debug!(
            table = %self.name,
            rows = rows_processed,
            fields = self.fields.len(),
            "field inference complete"
        );

        Ok(InferenceStats {
            rows_processed,
            fields_discovered: self.fields.len(),
        })
    }

    /// Record one observation of a value at a logical path.
    fn record(&mut self, raw_path: &str, value: &Value, prefix: Option<&str>) {
        let path = strip_leading_array_index(raw_path);
        if path.contains('[') {
            return;
        }

        let inferred = SnowflakeType::of(value);
        // Objects are represented by recursion into their members.
        if inferred == SnowflakeType::Object {
            return;
        }

        let node = normalise_key(&path);
        let key = match prefix {
            Some(p) => format!("{p}:{path}"),
            None => path,
        };

        if let Some(existing) = self.fields.get_mut(&key) {
            // A null placeholder upgrades once; a concrete type is pinned.
            if existing.inferred_type.is_placeholder() {
                existing.inferred_type = inferred;
            }
            return;
        }

        self.fields.insert(
            key.clone(),
            Field {
                node,
                path: key,
                inferred_type: inferred,
            },
        );
    }
}

/// Depth-first traversal visiting every node with its logical path.
///
/// With `bounded` set (the unpack walk), descent stops below any path that
/// already indexes into a non-leading array, so only the outermost array
/// nesting of an unpacked document is flattened.
fn walk<'a, F>(value: &'a Value, path: String, bounded: bool, visit: &mut F)
where
    F: FnMut(&str, &'a Value),
{
    visit(&path, value);

    if bounded && contains_non_leading_array(&path) {
        return;
    }

    match value {
        Value::Object(members) => {
            for (key, member) in members {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(member, child, bounded, visit);
            }
        }
        Value::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                walk(element, format!("{path}[{index}]"), bounded, visit);
            }
        }
        _ => {}
    }
}

fn validate_unpack_field(name: &str) -> Result<(), InferenceError> {
    if name.is_empty() || name.chars().any(|c| matches!(c, '.' | '[' | ']' | ':' | '"')) {
        return Err(InferenceError::InvalidUnpackField(name.to_string()));
    }
    Ok(())
}

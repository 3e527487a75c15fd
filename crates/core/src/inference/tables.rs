//! Table construction across a set of sources

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::keys::clean_table_name;
use super::types::Table;

/// One source dataset: an identifier (usually the file path) and its
/// parsed row documents.
#[derive(Debug, Clone)]
pub struct TableSource {
    /// Source identifier the table name is derived from
    pub identifier: String,
    /// One semi-structured document per record
    pub rows: Vec<Value>,
}

/// Build one [`Table`] per source, preserving input order.
///
/// Each table is named from its source identifier, bound to `project`, and
/// populated by a single inference pass over the source's rows. Any fatal
/// inference error aborts the whole build; no partial table set is returned.
pub fn build_tables(
    sources: &[TableSource],
    project: &str,
    config: &InferenceConfig,
) -> Result<Vec<Table>, InferenceError> {
    let mut tables = Vec::with_capacity(sources.len());
    for source in sources {
        let mut table = Table::new(clean_table_name(&source.identifier), project);
        let stats = table.infer_fields(&source.rows, config)?;
        debug!(
            source = %source.identifier,
            table = %table.name,
            fields = stats.fields_discovered,
            "table built"
        );
        tables.push(table);
    }
    Ok(tables)
}

/// Derive a project name from the directory holding the source files.
pub fn derive_project_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("PROJECT")
        .to_string()
}

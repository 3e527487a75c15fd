//! Source ingestion: CSV/JSON files into row documents
//!
//! The inference engine only requires a sequence of semi-structured row
//! documents per source; this module produces them from the two supported
//! on-disk formats. CSV cells are type-sniffed so both formats feed the
//! walker the same value kinds.

mod csv;
mod error;
mod json;

use std::fs::File;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

pub use self::csv::rows_from_csv;
pub use self::error::IngestError;
pub use self::json::rows_from_json;

/// Load a source file into row documents, dispatching on its extension.
pub fn load_rows(path: &Path) -> Result<Vec<Value>, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let rows = match extension.as_deref() {
        Some("csv") => rows_from_csv(File::open(path)?)?,
        Some("json") => rows_from_json(&std::fs::read(path)?)?,
        _ => return Err(IngestError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(path = %path.display(), rows = rows.len(), "source loaded");
    Ok(rows)
}

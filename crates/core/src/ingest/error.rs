//! Error types for source ingestion

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a source into row documents.
#[derive(Error, Debug)]
pub enum IngestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON was neither a document nor a list of documents
    #[error("expected a JSON document or array of documents, found {0}")]
    NotADocumentList(&'static str),

    /// File extension is not a supported source format
    #[error("unsupported source format: {0}")]
    UnsupportedFormat(PathBuf),
}

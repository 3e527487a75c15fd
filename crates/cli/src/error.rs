//! CLI error type

use std::path::PathBuf;

use thiserror::Error;

use templater_core::{InferenceError, IngestError, RenderError};

/// Errors surfaced to the user as a non-zero exit.
#[derive(Error, Debug)]
pub enum CliError {
    /// Nothing to generate from
    #[error("no CSV or JSON sources found in {0}")]
    NoSources(PathBuf),

    /// A source failed to load
    #[error("failed to load {path}: {source}")]
    Ingest {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    /// Field inference failed for a table
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Artifact rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Rendering of derived artifacts: SQL models and dbt schema documents

pub mod schema;
pub mod sql;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while rendering artifacts.
#[derive(Error, Debug)]
pub enum RenderError {
    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialize a schema property document to YAML.
pub fn to_yaml<T: Serialize>(document: &T) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(document)?)
}

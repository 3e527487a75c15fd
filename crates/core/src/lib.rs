//! Templater core - schema inference and dbt model generation
//!
//! Ingests semi-structured tabular data (CSV or JSON) and derives typed SQL
//! transformation statements and YAML schema documents for a data-warehouse
//! modeling workflow.
//!
//! Provides:
//! - Source ingestion into row documents ([`ingest`])
//! - The type-inference and field-flattening engine ([`inference`])
//! - SQL and dbt-YAML artifact rendering ([`render`])

pub mod inference;
pub mod ingest;
pub mod render;

// Re-export commonly used types
pub use inference::{
    Field, InferenceConfig, InferenceError, InferenceStats, SnowflakeType, Table, TableSource,
    build_tables, derive_project_name,
};
pub use ingest::{IngestError, load_rows};
pub use render::{RenderError, to_yaml};

//! Type-inference and field-flattening engine
//!
//! Walks arbitrarily nested, heterogeneous row documents and produces a
//! flat, deterministic, best-effort-typed column schema per source table.
//!
//! ## Features
//!
//! - **Structural walking** - Depth-first traversal with logical path
//!   tracking; objects recurse, arrays are opaque leaves
//! - **Embedded documents** - Configured fields holding stringified JSON
//!   are parsed and flattened into the parent namespace
//! - **Type reconciliation** - Conflicting observations across rows resolve
//!   with a one-way null-placeholder upgrade
//! - **Identifier sanitization** - Collision-free, human-legible warehouse
//!   column and table names from arbitrary real-world keys
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use templater_core::inference::{InferenceConfig, Table};
//!
//! let mut table = Table::new("ORDERS", "SHOP");
//! let rows = vec![json!({"id": 1, "meta": {"source": "web"}})];
//! table.infer_fields(&rows, &InferenceConfig::default())?;
//!
//! assert_eq!(table.fields["meta.source"].node, "META__SOURCE");
//! # Ok::<(), templater_core::inference::InferenceError>(())
//! ```

mod config;
mod error;
mod keys;
mod tables;
mod types;
mod unpack;
mod walker;

pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use keys::{clean_table_name, escape_path, normalise_key};
pub use tables::{TableSource, build_tables, derive_project_name};
pub use types::{Field, SnowflakeType, Table, structural_kind};
pub use unpack::unpack_embedded;
pub use walker::{InferenceStats, contains_non_leading_array, strip_leading_array_index};

//! Core data model: warehouse types, inferred fields and tables

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Warehouse column type inferred from a value's structural kind.
///
/// `Varchar` is the placeholder recorded for null observations; it is
/// eligible for a one-way upgrade once a concrete kind is seen at the same
/// path. `Object` is transient: the walker recurses into object members
/// instead of recording the object itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SnowflakeType {
    /// Textual leaf
    String,
    /// Whole number leaf
    Integer,
    /// Floating point leaf
    Float,
    /// Boolean leaf
    Boolean,
    /// Arrays are opaque leaves, never recursed into
    Array,
    /// Placeholder for "only null observed so far"
    Varchar,
    /// Structural marker, never persisted as a field
    Object,
}

/// The structural kind name of a JSON value.
pub fn structural_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "struct",
    }
}

impl SnowflakeType {
    /// Map a structural kind name to its warehouse type.
    ///
    /// Unrecognized kinds yield `None`: no confident type yet.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "string" => Some(Self::String),
            "int" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Boolean),
            "list" => Some(Self::Array),
            "null" => Some(Self::Varchar),
            "struct" => Some(Self::Object),
            _ => None,
        }
    }

    /// Infer the warehouse type of a JSON value.
    pub fn of(value: &Value) -> Self {
        // The kind set is closed over serde_json::Value, so the lookup is total.
        Self::from_kind(structural_kind(value)).unwrap_or(Self::Varchar)
    }

    /// The SQL type name emitted into generated models.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Boolean => "BOOLEAN",
            Self::Array => "ARRAY",
            Self::Varchar => "VARCHAR",
            Self::Object => "OBJECT",
        }
    }

    /// Whether this is the null placeholder awaiting a concrete upgrade.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Varchar)
    }
}

impl std::fmt::Display for SnowflakeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One inferred column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Sanitized, warehouse-safe display name
    pub node: String,
    /// Full logical access path from the row root, prior to output escaping
    pub path: String,
    /// Best-effort type reconciled across all observed rows
    pub inferred_type: SnowflakeType,
}

/// One source dataset and its inferred field set.
///
/// Fields are keyed by raw logical path with no ordering guarantee;
/// consumers sort by display node at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Sanitized table name derived from the source identifier
    pub name: String,
    /// Grouping namespace the table belongs to
    pub project: String,
    /// Logical path -> inferred field
    pub fields: HashMap<String, Field>,
}

impl Table {
    /// Create an empty table for one source.
    pub fn new(name: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            fields: HashMap::new(),
        }
    }
}

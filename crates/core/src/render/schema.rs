//! dbt schema property documents
//!
//! Serde value types for the `_models_schema.yml` and `_source_schema.yml`
//! files that document a (potentially multi-table) dbt project, plus the
//! constructors that derive them from inferred tables.

use serde::{Deserialize, Serialize};

use crate::inference::{Table, normalise_key};

/// Schema name dbt sources are registered under.
const SOURCE_SCHEMA: &str = "STAGING";

/// A `models:` property document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Models {
    pub version: u32,
    pub models: Vec<Model>,
}

/// One documented model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub columns: Vec<Column>,
}

/// One documented column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tests: Vec<String>,
}

/// A `sources:` property document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    pub version: u32,
    pub sources: Vec<Source>,
}

/// One registered source schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub schema: String,
    pub tables: Vec<SourceTable>,
}

/// One table registered under a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTable {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build the models document for a set of inferred tables.
///
/// Models and their columns are sorted by name for reproducible output.
pub fn project_models(tables: &[Table]) -> Models {
    let mut models: Vec<Model> = tables
        .iter()
        .map(|table| {
            let mut columns: Vec<Column> = table
                .fields
                .values()
                .map(|field| Column {
                    name: normalise_key(&field.node),
                    description: None,
                    tests: Vec::new(),
                })
                .collect();
            columns.sort_by(|a, b| a.name.cmp(&b.name));
            Model {
                name: table.name.clone(),
                description: None,
                columns,
            }
        })
        .collect();
    models.sort_by(|a, b| a.name.cmp(&b.name));
    Models { version: 2, models }
}

impl Models {
    /// Prefix every model name, satisfying dbt's name uniqueness constraint
    /// when the same tables appear in several layers.
    pub fn with_prefix(mut self, prefix: &str) -> Models {
        for model in &mut self.models {
            model.name = format!("{prefix}_{}", model.name);
        }
        self
    }

    /// Add description stubs and not-null tests for the public layer; these
    /// surface in the generated dbt docs.
    pub fn with_descriptions(mut self) -> Models {
        for model in &mut self.models {
            model.description = Some(format!("TODO: Description for MODEL, {}", model.name));
            for column in &mut model.columns {
                column.description = Some(format!("TODO: Description for COLUMN, {}", column.name));
                column.tests = vec!["not_null".to_string()];
            }
        }
        self
    }
}

/// Build the sources document registering every table under the project.
pub fn project_sources(tables: &[Table], project: &str) -> Sources {
    let mut source_tables: Vec<SourceTable> = tables
        .iter()
        .map(|table| SourceTable {
            name: table.name.clone(),
            description: Some(format!("TODO: Description for TABLE, {}", table.name)),
        })
        .collect();
    source_tables.sort_by(|a, b| a.name.cmp(&b.name));

    Sources {
        version: 2,
        sources: vec![Source {
            name: project.to_string(),
            schema: SOURCE_SCHEMA.to_string(),
            tables: source_tables,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{Field, SnowflakeType};

    fn table_with_fields(name: &str, nodes: &[&str]) -> Table {
        let mut table = Table::new(name, "project");
        for node in nodes {
            table.fields.insert(
                node.to_string(),
                Field {
                    node: node.to_string(),
                    path: node.to_string(),
                    inferred_type: SnowflakeType::String,
                },
            );
        }
        table
    }

    #[test]
    fn test_project_models_sorted() {
        let tables = vec![
            table_with_fields("FREQUENCY", &["PERCENTAGE", "LETTER", "FREQUENCY"]),
            table_with_fields("BASEBALL", &["WINS", "TEAM", "PAYROLL_MILLIONS"]),
        ];
        let models = project_models(&tables);

        assert_eq!(models.version, 2);
        assert_eq!(models.models[0].name, "BASEBALL");
        assert_eq!(models.models[1].name, "FREQUENCY");

        let columns: Vec<&str> = models.models[0]
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(columns, vec!["PAYROLL_MILLIONS", "TEAM", "WINS"]);
    }

    #[test]
    fn test_with_prefix() {
        let models = project_models(&[table_with_fields("BASEBALL", &["WINS"])]);
        let prefixed = models.with_prefix("TRANS01");
        assert_eq!(prefixed.models[0].name, "TRANS01_BASEBALL");
    }

    #[test]
    fn test_with_descriptions_adds_stubs_and_tests() {
        let models = project_models(&[table_with_fields("BASEBALL", &["WINS"])]);
        let documented = models.with_descriptions();

        let model = &documented.models[0];
        assert_eq!(
            model.description.as_deref(),
            Some("TODO: Description for MODEL, BASEBALL")
        );
        assert_eq!(
            model.columns[0].description.as_deref(),
            Some("TODO: Description for COLUMN, WINS")
        );
        assert_eq!(model.columns[0].tests, vec!["not_null"]);
    }

    #[test]
    fn test_project_sources() {
        let tables = vec![
            table_with_fields("ZEBRA", &["A"]),
            table_with_fields("AARDVARK", &["A"]),
        ];
        let sources = project_sources(&tables, "zoo");

        assert_eq!(sources.version, 2);
        assert_eq!(sources.sources.len(), 1);
        let source = &sources.sources[0];
        assert_eq!(source.name, "zoo");
        assert_eq!(source.schema, "STAGING");
        assert_eq!(source.tables[0].name, "AARDVARK");
        assert_eq!(source.tables[1].name, "ZEBRA");
    }

    #[test]
    fn test_models_yaml_shape() {
        let models = project_models(&[table_with_fields("BASEBALL", &["WINS"])]);
        let yaml = serde_yaml::to_string(&models).unwrap();
        assert!(yaml.contains("version: 2"));
        assert!(yaml.contains("name: BASEBALL"));
        assert!(yaml.contains("name: WINS"));
        // Empty optional keys are omitted entirely.
        assert!(!yaml.contains("description"));
        assert!(!yaml.contains("tests"));
    }
}

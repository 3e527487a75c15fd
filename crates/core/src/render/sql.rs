//! SQL model rendering for the dbt transform and public layers

use std::collections::HashMap;

use crate::inference::{Field, Table, escape_path, normalise_key};

/// Prefix applied to transform-layer model names to satisfy dbt's
/// project-wide name uniqueness constraint.
pub const TRANSFORM_PREFIX: &str = "TRANS01";

/// The name of a table's transform-layer model.
pub fn transform_model_name(table_name: &str) -> String {
    format!("{TRANSFORM_PREFIX}_{table_name}")
}

/// The dbt config header tagging a model with its project and table.
pub fn generate_tags_sql(project: &str, table: &str) -> String {
    format!(
        "{{{{ config(tags=['{}', '{}']) }}}}",
        project.to_uppercase(),
        table.to_uppercase()
    )
}

/// The dbt source reference for a model's FROM clause.
pub fn generate_source_sql(project: &str, table: &str) -> String {
    format!(
        "  {{{{ source('{}', '{}') }}}}",
        project.to_uppercase(),
        table.to_uppercase()
    )
}

/// The typed column list of a transform model.
///
/// Fields are sorted alphabetically by display node; paths are escaped
/// here, at render time only.
pub fn generate_columns_sql(fields: &HashMap<String, Field>) -> String {
    let mut fields: Vec<&Field> = fields.values().collect();
    fields.sort_by(|a, b| a.node.cmp(&b.node));

    let mut columns = String::new();
    for field in fields {
        columns.push_str(&format!(
            "  ,{}::{} AS {}\n",
            escape_path(&field.path),
            field.inferred_type,
            normalise_key(&field.node)
        ));
    }
    // The first column carries no comma; the last line no newline.
    let columns = columns.replacen(',', "", 1);
    columns.trim_end_matches('\n').to_string()
}

/// The full transform-layer model body: typed SELECT from the raw source.
pub fn transform_model(table: &Table) -> String {
    format!(
        "{tags}

WITH

SOURCE AS (

    SELECT * FROM
{source}

),

RENAMED AS (

    SELECT
{columns}
    FROM SOURCE

)

SELECT * FROM RENAMED
",
        tags = generate_tags_sql(&table.project, &table.name),
        source = generate_source_sql(&table.project, &table.name),
        columns = generate_columns_sql(&table.fields),
    )
}

/// The public-layer model body: a pass-through select over the transform
/// model, documented separately in the public schema file.
pub fn public_model(table: &Table) -> String {
    format!(
        "{tags}

SELECT * FROM {{{{ ref('{transform}') }}}}
",
        tags = generate_tags_sql(&table.project, &table.name),
        transform = transform_model_name(&table.name),
    )
}

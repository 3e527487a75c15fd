//! The generate command: scan a directory and emit the dbt model tree
//!
//! Output layout:
//!
//! ```text
//! output/
//!   transform/TRANS01_<TABLE>.sql
//!   transform/_models_schema.yml
//!   public/<TABLE>.sql
//!   public/_models_schema.yml
//!   _source_schema.yml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use templater_core::inference::{InferenceConfig, TableSource, build_tables, derive_project_name};
use templater_core::ingest::load_rows;
use templater_core::render::{schema, sql, to_yaml};

use crate::error::CliError;

pub fn run(
    dir: &Path,
    project: Option<&str>,
    unpack_fields: &[String],
    out: &Path,
) -> Result<(), CliError> {
    let source_paths = discover_sources(dir)?;
    if source_paths.is_empty() {
        return Err(CliError::NoSources(dir.to_path_buf()));
    }

    let project = match project {
        Some(name) => name.to_string(),
        None => derive_project_name(dir),
    };
    let config = InferenceConfig::builder()
        .unpack_fields(unpack_fields.to_vec())
        .build();

    eprintln!("Generating models for project '{project}'...");

    let mut sources = Vec::with_capacity(source_paths.len());
    for path in &source_paths {
        let rows = load_rows(path).map_err(|source| CliError::Ingest {
            path: path.clone(),
            source,
        })?;
        eprintln!("  {}: {} rows", path.display(), rows.len());
        sources.push(TableSource {
            identifier: path.display().to_string(),
            rows,
        });
    }

    let tables = build_tables(&sources, &project, &config)?;

    fs::create_dir_all(out.join("transform"))?;
    fs::create_dir_all(out.join("public"))?;

    for table in &tables {
        let transform_path = out
            .join("transform")
            .join(format!("{}.sql", sql::transform_model_name(&table.name)));
        fs::write(&transform_path, sql::transform_model(table))?;

        let public_path = out.join("public").join(format!("{}.sql", table.name));
        fs::write(&public_path, sql::public_model(table))?;

        eprintln!("  {} ({} columns)", table.name, table.fields.len());
    }

    let models = schema::project_models(&tables);
    fs::write(
        out.join("transform").join("_models_schema.yml"),
        to_yaml(&models.clone().with_prefix(sql::TRANSFORM_PREFIX))?,
    )?;
    fs::write(
        out.join("public").join("_models_schema.yml"),
        to_yaml(&models.with_descriptions())?,
    )?;
    fs::write(
        out.join("_source_schema.yml"),
        to_yaml(&schema::project_sources(&tables, &project))?,
    )?;

    eprintln!("Models written to {}", out.display());
    Ok(())
}

/// Collect the CSV/JSON sources directly inside `dir`, sorted by path so
/// repeated runs produce identical table sets.
fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("json") {
                paths.push(path);
            }
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_source(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_run_writes_model_tree() {
        let workspace = tempfile::tempdir().unwrap();
        let source_dir = workspace.path().join("sports");
        fs::create_dir(&source_dir).unwrap();
        write_source(&source_dir, "baseball.csv", "Team,Wins\nYankees,95\n");
        write_source(&source_dir, "notes.txt", "ignored");

        let out = workspace.path().join("output");
        run(&source_dir, None, &[], &out).unwrap();

        let transform = fs::read_to_string(out.join("transform/TRANS01_BASEBALL.sql")).unwrap();
        assert!(transform.contains("{{ source('SPORTS', 'BASEBALL') }}"));
        assert!(transform.contains("\"Wins\"::INTEGER AS WINS"));

        let public = fs::read_to_string(out.join("public/BASEBALL.sql")).unwrap();
        assert!(public.contains("{{ ref('TRANS01_BASEBALL') }}"));

        let transform_schema =
            fs::read_to_string(out.join("transform/_models_schema.yml")).unwrap();
        assert!(transform_schema.contains("name: TRANS01_BASEBALL"));

        let public_schema = fs::read_to_string(out.join("public/_models_schema.yml")).unwrap();
        assert!(public_schema.contains("TODO: Description for MODEL, BASEBALL"));

        let source_schema = fs::read_to_string(out.join("_source_schema.yml")).unwrap();
        assert!(source_schema.contains("name: sports"));
    }

    #[test]
    fn test_run_with_project_override_and_unpack() {
        let workspace = tempfile::tempdir().unwrap();
        let source_dir = workspace.path().join("raw");
        fs::create_dir(&source_dir).unwrap();
        write_source(
            &source_dir,
            "events.json",
            r#"[{"id": 1, "V": "{\"kind\": \"click\"}"}]"#,
        );

        let out = workspace.path().join("output");
        run(&source_dir, Some("web"), &["V".to_string()], &out).unwrap();

        let transform = fs::read_to_string(out.join("transform/TRANS01_EVENTS.sql")).unwrap();
        assert!(transform.contains("{{ config(tags=['WEB', 'EVENTS']) }}"));
        assert!(transform.contains("\"V\":\"kind\"::STRING AS KIND"));
    }

    #[test]
    fn test_run_errors_on_empty_directory() {
        let workspace = tempfile::tempdir().unwrap();
        let out = workspace.path().join("output");
        let err = run(workspace.path(), None, &[], &out).unwrap_err();
        assert!(matches!(err, CliError::NoSources(_)));
    }
}

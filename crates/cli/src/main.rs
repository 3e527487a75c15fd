//! dbt model templater CLI
//!
//! Scans a directory of CSV/JSON sources and generates the dbt transform
//! and public model tree with accompanying schema documents.

mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;

/// Generate dbt models and schema files from CSV or JSON sources.
#[derive(Debug, Parser)]
#[command(name = "templater", version, about)]
struct Cli {
    /// Directory containing the source .csv/.json files
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Project name; defaults to the source directory's name
    #[arg(long)]
    project: Option<String>,

    /// Field whose string value is an embedded JSON document to flatten
    /// into the record (repeatable)
    #[arg(long = "unpack", value_name = "FIELD")]
    unpack: Vec<String>,

    /// Output directory for the generated models
    #[arg(long, default_value = "output")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::generate::run(&cli.path, cli.project.as_deref(), &cli.unpack, &cli.out)?;
    Ok(())
}

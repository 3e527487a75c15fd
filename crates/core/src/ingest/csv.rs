//! CSV to row-document conversion

use std::io::Read;

use csv::ReaderBuilder;
use serde_json::{Map, Value};

use super::error::IngestError;

/// Read CSV from `reader` and produce one JSON object per record, keyed by
/// the header row.
///
/// Cell values are type-sniffed so downstream inference sees the same kinds
/// a native JSON source would carry: integer, then float, then boolean;
/// an empty cell becomes null; everything else stays a string.
pub fn rows_from_csv<R: Read>(reader: R) -> Result<Vec<Value>, IngestError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut document = Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            document.insert(header.to_string(), sniff_cell(cell));
        }
        rows.push(Value::Object(document));
    }
    Ok(rows)
}

fn sniff_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = cell.parse::<i64>() {
        return Value::from(integer);
    }
    if let Ok(float) = cell.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    match cell {
        "true" | "TRUE" | "True" => Value::Bool(true),
        "false" | "FALSE" | "False" => Value::Bool(false),
        _ => Value::String(cell.to_string()),
    }
}

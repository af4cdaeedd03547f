//! Serializes result sequences into CSV, JSON, or Markdown.
//!
//! Rendering is a pure function of the input records: it never mutates the
//! catalog or touches access counters, and rendering the same records twice
//! yields byte-identical output.

use crate::catalog::types::ToolRecord;
use crate::{Result, ToolshedError};
use std::fmt::Write;
use std::str::FromStr;

/// Column order shared by the CSV and Markdown renderers
const COLUMNS: &[&str] = &[
    "id",
    "name",
    "path",
    "description",
    "category",
    "tags",
    "access_count",
    "verified",
];

/// Delimiter used to join a record's tags into a single cell
const TAG_DELIMITER: &str = ";";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
}

impl FromStr for ExportFormat {
    type Err = ToolshedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(ToolshedError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render the records in the requested format
pub fn render(records: &[ToolRecord], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(render_csv(records)),
        ExportFormat::Json => render_json(records),
        ExportFormat::Markdown => Ok(render_markdown(records)),
    }
}

fn row_cells(record: &ToolRecord) -> [String; 8] {
    [
        record.id.clone(),
        record.name.clone(),
        record.path.clone(),
        record.description.clone(),
        record.category.clone(),
        record.tags.join(TAG_DELIMITER),
        record.access_count.to_string(),
        record.verified.to_string(),
    ]
}

fn render_csv(records: &[ToolRecord]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for record in records {
        let row: Vec<String> = row_cells(record).iter().map(|c| csv_escape(c)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// RFC 4180 quoting: wrap the field when it contains a delimiter, quote, or
/// newline, doubling any embedded quotes
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_json(records: &[ToolRecord]) -> Result<String> {
    // Struct field order gives a stable key order for reproducible output
    Ok(serde_json::to_string_pretty(records)?)
}

fn render_markdown(records: &[ToolRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "| {} |", COLUMNS.join(" | "));
    let _ = writeln!(out, "|{}", " --- |".repeat(COLUMNS.len()));
    for record in records {
        let row: Vec<String> = row_cells(record)
            .iter()
            .map(|c| markdown_escape(c))
            .collect();
        let _ = writeln!(out, "| {} |", row.join(" | "));
    }
    out
}

/// Keep cell content from breaking the table: escape pipes, flatten newlines
fn markdown_escape(field: &str) -> String {
    field.replace('|', "\\|").replace(['\n', '\r'], " ")
}

//! Output formatting for CLI

use ingest_guard::{Document, Format};
use serde_json::{Value, json};

use crate::error::CliError;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// One JSON report object
    Json,
}

/// One-line description of an accepted document.
fn summarize(document: &Document) -> String {
    match document {
        Document::Csv(rows) => {
            let columns = rows.first().map(|row| row.len()).unwrap_or(0);
            format!("{} row(s), {} column(s)", rows.len(), columns)
        }
        Document::Json(value) => {
            let root = ingest_guard::JsonType::of(value);
            match value {
                Value::Object(map) => format!("{} root with {} key(s)", root, map.len()),
                Value::Array(items) => format!("{} root with {} item(s)", root, items.len()),
                _ => format!("{} root", root),
            }
        }
        Document::Xml(root) => format!(
            "root <{}>, {} element(s)",
            root.name,
            root.element_count()
        ),
    }
}

pub fn format_success(input: &str, format: Format, document: &Document, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => format!("✅ {} ({}): {}", input, format, summarize(document)),
        OutputFormat::Json => json!({
            "input": input,
            "format": format,
            "valid": true,
            "summary": summarize(document),
        })
        .to_string(),
    }
}

pub fn format_failure(input: &str, error: &CliError, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => format!("❌ {}: {}", input, error),
        OutputFormat::Json => json!({
            "input": input,
            "valid": false,
            "error": {
                "kind": error.kind(),
                "message": error.to_string(),
                "exitCode": error.exit_code(),
            },
        })
        .to_string(),
    }
}

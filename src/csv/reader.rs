//! Delimited-text reader
//!
//! Parsing is delegated to the `csv` crate; this module sequences the
//! validation rules around it. Rule order is fixed and the first violation
//! aborts the read.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use ::csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use super::config::CsvOptions;
use super::error::CsvError;
use super::header::{check_header, missing_fields};
use super::input::SkipInitialSpace;
use super::row::Row;
use crate::source::{Source, open_file, read_to_text, rewind};

/// Read delimited text from any [`Source`] and validate it.
///
/// Rewindable sources are scanned for blank lines before parsing; a
/// forward-only [`Source::Stream`] skips that scan.
///
/// # Example
///
/// ```
/// use ingest_guard::csv::{CsvOptions, read_csv};
///
/// let rows = read_csv("id,name\n1,Alice", &CsvOptions::default()).unwrap();
/// assert_eq!(rows[0].get("name"), Some("Alice"));
/// ```
pub fn read_csv<'a>(
    source: impl Into<Source<'a>>,
    options: &CsvOptions,
) -> Result<Vec<Row>, CsvError> {
    let source = source.into();
    debug!(
        source = source.kind(),
        delimiter = %(options.delimiter as char),
        "Reading delimited text"
    );

    let result = read_source(source, options);
    match &result {
        Ok(rows) => debug!(rows = rows.len(), "Delimited text accepted"),
        Err(e) => warn!(kind = e.kind(), "Delimited text rejected: {}", e),
    }
    result
}

/// Read delimited text held in a string.
pub fn read_csv_str(text: &str, options: &CsvOptions) -> Result<Vec<Row>, CsvError> {
    read_csv(Source::Text(text), options)
}

/// Open a UTF-8 file and read it as delimited text.
///
/// A missing file is reported as [`CsvError::FileNotFound`]. The file handle
/// is dropped before this function returns, on success and on failure.
pub fn read_csv_file(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Vec<Row>, CsvError> {
    let file = open_file(path.as_ref())?;
    read_csv(Source::from(file), options)
}

fn read_source(source: Source<'_>, options: &CsvOptions) -> Result<Vec<Row>, CsvError> {
    match source {
        Source::Text(text) => {
            scan_blank_lines(text)?;
            parse_records(text.as_bytes(), options)
        }
        Source::Bytes(bytes) => {
            let text =
                std::str::from_utf8(bytes).map_err(|e| CsvError::Encoding(e.to_string()))?;
            scan_blank_lines(text)?;
            parse_records(bytes, options)
        }
        Source::Seekable(mut reader) => {
            let text = read_to_text(&mut reader)?;
            scan_blank_lines(&text)?;
            rewind(reader.as_mut())?;
            parse_records(reader, options)
        }
        Source::Stream(reader) => {
            debug!("Source cannot be rewound, skipping blank-line scan");
            parse_records(reader, options)
        }
    }
}

/// Reject blank physical lines anywhere but the first line.
fn scan_blank_lines(text: &str) -> Result<(), CsvError> {
    match text
        .lines()
        .enumerate()
        .find(|(idx, line)| *idx > 0 && line.trim().is_empty())
    {
        Some((idx, _)) => Err(CsvError::EmptyLine { line: idx + 1 }),
        None => Ok(()),
    }
}

fn parse_records<R: Read>(input: R, options: &CsvOptions) -> Result<Vec<Row>, CsvError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(SkipInitialSpace::new(input, options.delimiter));
    let mut record = StringRecord::new();

    let has_header = reader.read_record(&mut record)?;
    // The parser skips blank records, so a blank first line would otherwise
    // promote the next line to header.
    if !has_header || reader.get_ref().first_line_blank() {
        return Err(CsvError::NoHeader);
    }
    let header = to_fields(&record);
    if header.is_empty() {
        return Err(CsvError::NoHeader);
    }
    check_header(&header)?;

    let required = options.required_fields.as_deref().unwrap_or(&header);
    let missing = missing_fields(&header, required);
    if !missing.is_empty() {
        return Err(CsvError::MissingHeaderFields { fields: missing });
    }
    let required: Vec<(usize, String)> = required
        .iter()
        .filter_map(|field| {
            header
                .iter()
                .position(|name| name == field)
                .map(|idx| (idx, field.clone()))
        })
        .collect();

    let columns: Arc<[String]> = header.into();
    let mut rows = Vec::new();
    let mut line = 1;
    while reader.read_record(&mut record)? {
        line += 1;
        rows.push(build_row(&columns, &required, to_fields(&record), line)?);
    }
    Ok(rows)
}

fn to_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn build_row(
    columns: &Arc<[String]>,
    required: &[(usize, String)],
    fields: Vec<String>,
    line: usize,
) -> Result<Row, CsvError> {
    if fields.len() > columns.len() {
        return Err(CsvError::ExtraColumns { line });
    }

    let mut values: Vec<Option<String>> = fields.into_iter().map(Some).collect();
    values.resize(columns.len(), None);

    let blank: Vec<String> = required
        .iter()
        .filter(|(idx, _)| values[*idx].as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(_, field)| field.clone())
        .collect();
    if !blank.is_empty() {
        return Err(CsvError::MissingValue {
            fields: blank,
            line,
        });
    }

    Ok(Row::new(Arc::clone(columns), values))
}

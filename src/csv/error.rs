//! Error types for the delimited-text reader

use std::path::PathBuf;

use thiserror::Error;

use crate::source::SourceError;

/// Errors raised while reading delimited text.
///
/// Row-level variants carry the 1-based line number, header variants list every
/// header name so the caller can see the whole header at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// The input path does not exist
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The input path exists but could not be opened
    #[error("IO error reading {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The input is not valid UTF-8
    #[error("Cannot read CSV input (encoding error): {0}")]
    Encoding(String),

    /// The source could not be read at all
    #[error("Invalid CSV source: {0}")]
    InvalidSource(String),

    /// The grammar parser rejected a record: unequal record lengths or a
    /// failed deserialization. Rows are read with `flexible(true)`, so the
    /// readers in this crate do not produce it today. An unterminated quote
    /// is not a grammar error either; the parser ends the field at end of
    /// input.
    #[error("CSV parsing error: {0}")]
    Grammar(String),

    /// Blank line after the header
    #[error("Empty line detected at line {line}.")]
    EmptyLine { line: usize },

    /// No header record at all
    #[error("No header row found in CSV input.")]
    NoHeader,

    /// Every header name is numeric or blank
    #[error("Header looks like data, not a header (only numbers or blanks): {}.", .names.join(", "))]
    InvalidHeader { names: Vec<String> },

    /// A header name starts with a digit
    #[error("Invalid column names: {}. Names must not start with a digit.", .names.join(", "))]
    InvalidColumnName { names: Vec<String> },

    /// A header name contains a space
    #[error("Column names contain spaces: {}.", .names.join(", "))]
    HeaderContainsSpace { names: Vec<String> },

    /// The same header name appears twice
    #[error("Duplicate column names: {}.", .names.join(", "))]
    DuplicateHeader { names: Vec<String> },

    /// Required fields absent from the header
    #[error("Missing fields in header: {}.", .fields.join(", "))]
    MissingHeaderFields { fields: Vec<String> },

    /// A record has more values than the header has columns
    #[error("Extra columns at line {line}.")]
    ExtraColumns { line: usize },

    /// Required fields with no value, or only whitespace
    #[error("Missing values in fields: {} at line {line}.", .fields.join(", "))]
    MissingValue { fields: Vec<String>, line: usize },

    /// Anything the other variants do not describe
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl CsvError {
    /// Whether the failure happened while acquiring the input rather than
    /// while validating its content.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            CsvError::FileNotFound { .. }
                | CsvError::Io { .. }
                | CsvError::Encoding(_)
                | CsvError::InvalidSource(_)
        )
    }

    /// Stable name of the variant, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CsvError::FileNotFound { .. } => "file_not_found",
            CsvError::Io { .. } => "io",
            CsvError::Encoding(_) => "encoding",
            CsvError::InvalidSource(_) => "invalid_source",
            CsvError::Grammar(_) => "grammar",
            CsvError::EmptyLine { .. } => "empty_line",
            CsvError::NoHeader => "no_header",
            CsvError::InvalidHeader { .. } => "invalid_header",
            CsvError::InvalidColumnName { .. } => "invalid_column_name",
            CsvError::HeaderContainsSpace { .. } => "header_contains_space",
            CsvError::DuplicateHeader { .. } => "duplicate_header",
            CsvError::MissingHeaderFields { .. } => "missing_header_fields",
            CsvError::ExtraColumns { .. } => "extra_columns",
            CsvError::MissingValue { .. } => "missing_value",
            CsvError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<SourceError> for CsvError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::FileNotFound(path) => CsvError::FileNotFound { path },
            SourceError::Io { path, message } => CsvError::Io { path, message },
            SourceError::Encoding(message) => CsvError::Encoding(message),
            SourceError::Unreadable(message) => CsvError::InvalidSource(message),
        }
    }
}

impl From<::csv::Error> for CsvError {
    fn from(e: ::csv::Error) -> Self {
        match e.kind() {
            ::csv::ErrorKind::Utf8 { .. } => CsvError::Encoding(e.to_string()),
            ::csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::InvalidData => {
                CsvError::Encoding(io.to_string())
            }
            ::csv::ErrorKind::Io(io) => CsvError::InvalidSource(io.to_string()),
            ::csv::ErrorKind::UnequalLengths { .. } | ::csv::ErrorKind::Deserialize { .. } => {
                CsvError::Grammar(e.to_string())
            }
            _ => CsvError::Unexpected(e.to_string()),
        }
    }
}

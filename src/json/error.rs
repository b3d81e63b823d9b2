//! Error types for the structured-object reader

use std::path::PathBuf;

use thiserror::Error;

use super::types::JsonType;
use crate::source::SourceError;

/// Errors raised while reading JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error reading {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The input bytes are not valid UTF-8
    #[error("Failed to read JSON input: {0}")]
    Encoding(String),

    #[error("Invalid JSON source: {0}")]
    InvalidSource(String),

    /// The grammar parser rejected the text
    #[error("Invalid JSON: {0}")]
    InvalidFormat(String),

    /// Required top-level keys absent from the root object
    #[error("Missing keys: {}", .keys.join(", "))]
    MissingKeys { keys: Vec<String> },

    /// A present, non-null key holds a value of another kind
    #[error("Key '{key}' should be of type {expected}, got {actual}.")]
    WrongType {
        key: String,
        expected: JsonType,
        actual: JsonType,
    },
}

impl JsonError {
    /// Whether the failure happened while acquiring the input.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            JsonError::FileNotFound { .. }
                | JsonError::Io { .. }
                | JsonError::Encoding(_)
                | JsonError::InvalidSource(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            JsonError::FileNotFound { .. } => "file_not_found",
            JsonError::Io { .. } => "io",
            JsonError::Encoding(_) => "encoding",
            JsonError::InvalidSource(_) => "invalid_source",
            JsonError::InvalidFormat(_) => "invalid_format",
            JsonError::MissingKeys { .. } => "missing_keys",
            JsonError::WrongType { .. } => "wrong_type",
        }
    }
}

impl From<SourceError> for JsonError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::FileNotFound(path) => JsonError::FileNotFound { path },
            SourceError::Io { path, message } => JsonError::Io { path, message },
            SourceError::Encoding(message) => JsonError::Encoding(message),
            SourceError::Unreadable(message) => JsonError::InvalidSource(message),
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        JsonError::InvalidFormat(e.to_string())
    }
}

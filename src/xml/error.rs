//! Error types for the markup reader

use std::path::PathBuf;

use thiserror::Error;

use super::rules::AttrType;
use crate::source::SourceError;

/// Errors raised while reading markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error reading {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Failed to read XML input: {0}")]
    Encoding(String),

    /// The source is neither text nor a readable stream
    #[error("Provide either XML text or a readable stream: {0}")]
    InvalidSource(String),

    /// The document is not well-formed
    #[error("Invalid XML: {0}")]
    Malformed(String),

    #[error("Missing required tag <{tag}>.")]
    MissingTag { tag: String },

    #[error("<{tag}> is missing attribute '{attribute}'.")]
    MissingAttribute { tag: String, attribute: String },

    /// An attribute type rule key is not of the form `tag@attribute`
    #[error("Use the 'tag@attr' format in attribute type rules, got '{key}'.")]
    BadRuleFormat { key: String },

    #[error("Attribute {attribute} in <{tag}> is not a boolean: '{value}'.")]
    BooleanFormat {
        tag: String,
        attribute: String,
        value: String,
    },

    #[error("Date '{value}' in attribute {attribute} of <{tag}> is not a valid YYYY-MM-DD date.")]
    DateFormat {
        tag: String,
        attribute: String,
        value: String,
    },

    #[error("Wrong type of attribute {attribute} in <{tag}>: expected {expected}, got '{value}'.")]
    AttributeType {
        tag: String,
        attribute: String,
        expected: AttrType,
        value: String,
    },

    #[error("Tag <{tag}> may appear at most once, found {count}.")]
    DuplicateTag { tag: String, count: usize },
}

impl XmlError {
    /// Whether the failure happened while acquiring the input.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            XmlError::FileNotFound { .. }
                | XmlError::Io { .. }
                | XmlError::Encoding(_)
                | XmlError::InvalidSource(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            XmlError::FileNotFound { .. } => "file_not_found",
            XmlError::Io { .. } => "io",
            XmlError::Encoding(_) => "encoding",
            XmlError::InvalidSource(_) => "invalid_source",
            XmlError::Malformed(_) => "malformed",
            XmlError::MissingTag { .. } => "missing_tag",
            XmlError::MissingAttribute { .. } => "missing_attribute",
            XmlError::BadRuleFormat { .. } => "bad_rule_format",
            XmlError::BooleanFormat { .. } => "boolean_format",
            XmlError::DateFormat { .. } => "date_format",
            XmlError::AttributeType { .. } => "attribute_type",
            XmlError::DuplicateTag { .. } => "duplicate_tag",
        }
    }
}

impl From<SourceError> for XmlError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::FileNotFound(path) => XmlError::FileNotFound { path },
            SourceError::Io { path, message } => XmlError::Io { path, message },
            SourceError::Encoding(message) => XmlError::Encoding(message),
            SourceError::Unreadable(message) => XmlError::InvalidSource(message),
        }
    }
}

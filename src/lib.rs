//! Ingest Guard - format-validating readers for semi-trusted input
//!
//! Provides readers that parse input with a standard grammar crate and reject
//! it early, with a specific message, when it breaks a validation rule:
//! - Delimited text (CSV): header shape, required fields, row completeness
//! - Structured objects (JSON): required keys, value kinds
//! - Markup (XML): required tags and attributes, attribute types, unique tags
//!
//! Every reader is a plain function of its input and options. Validation is
//! fail-fast: the first violated rule, in a fixed order, is returned as the
//! reader's error type and no partial result is produced.

pub mod csv;
pub mod json;
mod ordered;
pub mod profile;
pub mod source;
#[cfg(feature = "xml")]
pub mod xml;

// Re-export commonly used types
pub use crate::csv::{CsvError, CsvOptions, Row, read_csv, read_csv_file, read_csv_str};
pub use json::{JsonError, JsonOptions, JsonType, read_json, read_json_file, read_json_from};
pub use profile::{Document, Format, ProfileError, ReadError, ValidationProfile};
pub use source::{Source, SourceError};
#[cfg(feature = "xml")]
pub use xml::{AttrType, Element, XmlError, XmlOptions, read_xml, read_xml_file, read_xml_str};

//! Markup (XML) reader
//!
//! Parses a document into an [`Element`] tree with `quick-xml` and validates:
//! - required tags anywhere below the root element
//! - required attributes on every occurrence of a tag
//! - attribute value types (`boolean`, `iso-date`, `integer`, `float`, `text`)
//! - tags that must be unique below the root element

pub mod config;
pub mod element;
pub mod error;
mod parser;
pub mod reader;
pub mod rules;

pub use config::XmlOptions;
pub use element::Element;
pub use error::XmlError;
pub use reader::{read_xml, read_xml_file, read_xml_str};
pub use rules::AttrType;

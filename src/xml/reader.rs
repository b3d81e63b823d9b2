//! Markup reader
//!
//! Rule order is fixed: required tags, required attributes, attribute types,
//! unique tags. Each category stops at its first violation.

use std::path::Path;

use tracing::{debug, warn};

use super::config::XmlOptions;
use super::element::Element;
use super::error::XmlError;
use super::parser::parse_document;
use super::rules::{AttrType, check_value, split_rule_key};
use crate::source::{Source, open_file};

/// Parse markup from any [`Source`] and validate the tree.
///
/// # Example
///
/// ```
/// use ingest_guard::xml::{XmlOptions, read_xml};
///
/// let options = XmlOptions::new().required_tags(["item"]);
/// let root = read_xml(r#"<root><item id="1"/></root>"#, &options).unwrap();
/// assert_eq!(root.children[0].attribute("id"), Some("1"));
/// ```
pub fn read_xml<'a>(
    source: impl Into<Source<'a>>,
    options: &XmlOptions,
) -> Result<Element, XmlError> {
    let source = source.into();
    debug!(source = source.kind(), "Reading XML");

    let result = source
        .into_text()
        .map_err(XmlError::from)
        .and_then(|text| parse_and_validate(&text, options));
    match &result {
        Ok(root) => debug!(
            root = %root.name,
            elements = root.element_count(),
            "XML accepted"
        ),
        Err(e) => warn!(kind = e.kind(), "XML rejected: {}", e),
    }
    result
}

/// Parse markup held in a string.
pub fn read_xml_str(text: &str, options: &XmlOptions) -> Result<Element, XmlError> {
    read_xml(Source::Text(text), options)
}

/// Open a UTF-8 file and read it as markup.
///
/// A missing file is reported as [`XmlError::FileNotFound`].
pub fn read_xml_file(path: impl AsRef<Path>, options: &XmlOptions) -> Result<Element, XmlError> {
    let file = open_file(path.as_ref())?;
    read_xml(file, options)
}

fn parse_and_validate(text: &str, options: &XmlOptions) -> Result<Element, XmlError> {
    let root = parse_document(text)?;
    check_required_tags(&root, &options.required_tags)?;
    check_required_attrs(&root, &options.required_attrs)?;
    check_attr_types(&root, &options.attr_types)?;
    check_unique_tags(&root, &options.unique_tags)?;
    Ok(root)
}

fn check_required_tags(root: &Element, tags: &[String]) -> Result<(), XmlError> {
    match tags.iter().find(|tag| root.find_all(tag).next().is_none()) {
        Some(tag) => Err(XmlError::MissingTag { tag: tag.clone() }),
        None => Ok(()),
    }
}

/// A tag that does not occur at all is not an attribute violation.
fn check_required_attrs(root: &Element, rules: &[(String, Vec<String>)]) -> Result<(), XmlError> {
    for (tag, attributes) in rules {
        for element in root.find_all(tag) {
            if let Some(missing) = attributes
                .iter()
                .find(|attribute| !element.attributes.contains_key(attribute.as_str()))
            {
                return Err(XmlError::MissingAttribute {
                    tag: tag.clone(),
                    attribute: missing.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_attr_types(root: &Element, rules: &[(String, AttrType)]) -> Result<(), XmlError> {
    for (key, expected) in rules {
        let (tag, attribute) = split_rule_key(key)?;
        for element in root.find_all(tag) {
            if let Some(value) = element.attribute(attribute) {
                check_value(tag, attribute, *expected, value)?;
            }
        }
    }
    Ok(())
}

fn check_unique_tags(root: &Element, tags: &[String]) -> Result<(), XmlError> {
    for tag in tags {
        let count = root.count(tag);
        if count > 1 {
            return Err(XmlError::DuplicateTag {
                tag: tag.clone(),
                count,
            });
        }
    }
    Ok(())
}

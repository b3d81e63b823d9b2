//! Attribute type rules
//!
//! A rule is written as `"tag@attribute"` mapped to an [`AttrType`]. Values are
//! checked as raw attribute strings; nothing is converted in the tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::XmlError;

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// Expected type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttrType {
    /// `true` or `false`, any letter case
    #[serde(alias = "bool")]
    Boolean,
    /// Calendar date written as `YYYY-MM-DD`
    #[serde(alias = "iso", alias = "date")]
    IsoDate,
    /// Optionally signed whole number of any size
    #[serde(alias = "int")]
    Integer,
    /// Anything `f64` parses
    Float,
    /// Any string
    #[serde(alias = "string", alias = "str")]
    Text,
}

impl AttrType {
    pub fn as_str(self) -> &'static str {
        match self {
            AttrType::Boolean => "boolean",
            AttrType::IsoDate => "iso-date",
            AttrType::Integer => "integer",
            AttrType::Float => "float",
            AttrType::Text => "text",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttrType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Ok(AttrType::Boolean),
            "iso-date" | "iso" | "date" => Ok(AttrType::IsoDate),
            "integer" | "int" => Ok(AttrType::Integer),
            "float" => Ok(AttrType::Float),
            "text" | "string" | "str" => Ok(AttrType::Text),
            other => Err(format!("unknown attribute type: {}", other)),
        }
    }
}

/// Split a `tag@attribute` rule key.
pub(crate) fn split_rule_key(key: &str) -> Result<(&str, &str), XmlError> {
    match key.split_once('@') {
        Some((tag, attribute))
            if !tag.is_empty() && !attribute.is_empty() && !attribute.contains('@') =>
        {
            Ok((tag, attribute))
        }
        _ => Err(XmlError::BadRuleFormat {
            key: key.to_string(),
        }),
    }
}

/// Check one attribute value against its declared type.
pub(crate) fn check_value(
    tag: &str,
    attribute: &str,
    expected: AttrType,
    value: &str,
) -> Result<(), XmlError> {
    match expected {
        AttrType::Boolean if !is_boolean(value) => Err(XmlError::BooleanFormat {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }),
        AttrType::IsoDate if !is_iso_date(value) => Err(XmlError::DateFormat {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }),
        AttrType::Integer if !is_integer(value) => Err(type_error(tag, attribute, expected, value)),
        AttrType::Float if !is_float(value) => Err(type_error(tag, attribute, expected, value)),
        _ => Ok(()),
    }
}

fn type_error(tag: &str, attribute: &str, expected: AttrType, value: &str) -> XmlError {
    XmlError::AttributeType {
        tag: tag.to_string(),
        attribute: attribute.to_string(),
        expected,
        value: value.to_string(),
    }
}

fn is_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value.trim())
}

fn is_float(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Exact `YYYY-MM-DD` shape and a real calendar day.
fn is_iso_date(value: &str) -> bool {
    DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

//! Header shape rules
//!
//! Checks run in a fixed order and the first violation wins:
//! data-looking header, digit-leading name, name with a space, duplicate name.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::CsvError;

static NUMERIC_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

static DIGIT_LEADING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d").unwrap());

/// Run every header rule against the extracted names.
pub(crate) fn check_header(names: &[String]) -> Result<(), CsvError> {
    check_not_data(names)?;
    check_no_leading_digit(names)?;
    check_no_spaces(names)?;
    check_no_duplicates(names)
}

/// A header made only of numbers and blanks is a data row.
fn check_not_data(names: &[String]) -> Result<(), CsvError> {
    let looks_like_data = names.iter().all(|name| {
        let name = name.trim();
        name.is_empty() || NUMERIC_NAME_REGEX.is_match(name)
    });
    if looks_like_data {
        return Err(CsvError::InvalidHeader {
            names: names.to_vec(),
        });
    }
    Ok(())
}

fn check_no_leading_digit(names: &[String]) -> Result<(), CsvError> {
    if names
        .iter()
        .any(|name| DIGIT_LEADING_REGEX.is_match(name.trim()))
    {
        return Err(CsvError::InvalidColumnName {
            names: names.to_vec(),
        });
    }
    Ok(())
}

fn check_no_spaces(names: &[String]) -> Result<(), CsvError> {
    if names.iter().any(|name| name.contains(' ')) {
        return Err(CsvError::HeaderContainsSpace {
            names: names.to_vec(),
        });
    }
    Ok(())
}

/// Names are compared exactly; `Name` and `name` are different columns.
fn check_no_duplicates(names: &[String]) -> Result<(), CsvError> {
    let mut seen = HashSet::with_capacity(names.len());
    if names.iter().any(|name| !seen.insert(name.as_str())) {
        return Err(CsvError::DuplicateHeader {
            names: names.to_vec(),
        });
    }
    Ok(())
}

/// Required fields that the header does not contain, in the caller's order.
pub(crate) fn missing_fields(names: &[String], required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|field| !names.contains(*field))
        .cloned()
        .collect()
}

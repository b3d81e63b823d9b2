//! Structured-object reader
//!
//! Parses with `serde_json`, then checks required keys before key types.
//! Within each check every violation is collected and reported together.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::config::JsonOptions;
use super::error::JsonError;
use super::types::JsonType;
use crate::source::{Source, open_file};

/// Parse JSON text and validate its root object.
///
/// Roots that are not objects (arrays, scalars) are returned without any key
/// checks.
///
/// # Example
///
/// ```
/// use ingest_guard::json::{JsonOptions, JsonType, read_json};
///
/// let options = JsonOptions::new()
///     .required_keys(["name"])
///     .key_type("age", JsonType::Integer);
/// let value = read_json(r#"{"name": "Jan", "age": 30}"#, &options).unwrap();
/// assert_eq!(value["age"], 30);
/// ```
pub fn read_json(text: &str, options: &JsonOptions) -> Result<Value, JsonError> {
    debug!(bytes = text.len(), "Reading JSON");
    let result = parse_and_validate(text, options);
    match &result {
        Ok(value) => debug!(root = %JsonType::of(value), "JSON accepted"),
        Err(e) => warn!(kind = e.kind(), "JSON rejected: {}", e),
    }
    result
}

/// Read a whole [`Source`] as UTF-8 and pass it to [`read_json`].
pub fn read_json_from<'a>(
    source: impl Into<Source<'a>>,
    options: &JsonOptions,
) -> Result<Value, JsonError> {
    let text = source.into().into_text()?;
    read_json(&text, options)
}

/// Open a UTF-8 file and read it as JSON.
///
/// A missing file is reported as [`JsonError::FileNotFound`].
pub fn read_json_file(path: impl AsRef<Path>, options: &JsonOptions) -> Result<Value, JsonError> {
    let file = open_file(path.as_ref())?;
    read_json_from(file, options)
}

fn parse_and_validate(text: &str, options: &JsonOptions) -> Result<Value, JsonError> {
    let value: Value = serde_json::from_str(text)?;

    if let Value::Object(root) = &value {
        if let Some(required) = &options.required_keys {
            check_required_keys(root, required)?;
        }
        check_key_types(root, &options.key_types)?;
    }

    Ok(value)
}

fn check_required_keys(root: &Map<String, Value>, required: &[String]) -> Result<(), JsonError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !root.contains_key(key.as_str()))
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(JsonError::MissingKeys { keys: missing })
    }
}

/// Absent keys and keys set to `null` are not type checked.
fn check_key_types(
    root: &Map<String, Value>,
    key_types: &[(String, JsonType)],
) -> Result<(), JsonError> {
    for (key, expected) in key_types {
        let Some(value) = root.get(key) else {
            continue;
        };
        if value.is_null() || expected.matches(value) {
            continue;
        }
        return Err(JsonError::WrongType {
            key: key.clone(),
            expected: *expected,
            actual: JsonType::of(value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_required_keys_report_all_missing() {
        let root = object(json!({"a": 1}));
        let required = vec!["x".to_string(), "a".to_string(), "y".to_string()];
        let err = check_required_keys(&root, &required).unwrap_err();
        assert_eq!(err.to_string(), "Missing keys: x, y");
    }

    #[test]
    fn test_null_values_skip_type_check() {
        let root = object(json!({"age": null}));
        let rules = vec![("age".to_string(), JsonType::Integer)];
        assert!(check_key_types(&root, &rules).is_ok());
    }

    #[test]
    fn test_wrong_type_names_both_kinds() {
        let root = object(json!({"age": "thirty"}));
        let rules = vec![("age".to_string(), JsonType::Integer)];
        let err = check_key_types(&root, &rules).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Key 'age' should be of type integer, got string."
        );
    }
}

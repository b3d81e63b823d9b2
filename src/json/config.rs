//! Validation options for the structured-object reader

use serde::{Deserialize, Serialize};

use super::types::JsonType;

/// Options for [`read_json`](super::read_json).
///
/// Both checks only apply when the document root is an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonOptions {
    /// Top-level keys that must be present
    pub required_keys: Option<Vec<String>>,

    /// Expected kind per top-level key, checked in this order
    #[serde(with = "crate::ordered")]
    pub key_types: Vec<(String, JsonType)>,
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Declare the expected kind of a key. Declaring the same key twice keeps both rules.
    pub fn key_type(mut self, key: impl Into<String>, expected: JsonType) -> Self {
        self.key_types.push((key.into(), expected));
        self
    }
}

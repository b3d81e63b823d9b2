//! Validation options for the delimited-text reader

use serde::{Deserialize, Serialize};

/// Options for [`read_csv`](super::read_csv).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvOptions {
    /// Columns that must exist in the header and hold a non-blank value in
    /// every row. `None` makes every header column required.
    pub required_fields: Option<Vec<String>>,

    /// Field separator, a single ASCII character
    #[serde(with = "delimiter_char")]
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            required_fields: None,
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required fields explicitly
    pub fn required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the field separator
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Serde adapter storing the delimiter as a one-character string.
mod delimiter_char {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delimiter: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&(*delimiter as char).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let value = String::deserialize(deserializer)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c as u8),
            _ => Err(D::Error::custom(format!(
                "delimiter must be a single ASCII character, got {:?}",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CsvOptions::default();
        assert_eq!(options.delimiter, b',');
        assert!(options.required_fields.is_none());
    }

    #[test]
    fn test_delimiter_from_string() {
        let options: CsvOptions = serde_json::from_str(r#"{"delimiter": "\t"}"#).unwrap();
        assert_eq!(options.delimiter, b'\t');

        assert!(serde_json::from_str::<CsvOptions>(r#"{"delimiter": ";;"}"#).is_err());
        assert!(serde_json::from_str::<CsvOptions>(r#"{"delimiter": "§"}"#).is_err());
    }
}

//! Row mapping returned by the delimited-text reader

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data record, keyed by header name in header order.
///
/// All rows of one read share the same header. A value is `None` when the
/// record ended before reaching that column; values are otherwise the raw
/// strings from the input, never coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl Row {
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<Option<String>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Value of a column, `None` if the column is unknown or had no value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values[idx].as_deref())
    }

    /// Whether the header has this column.
    pub fn contains_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Header names, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Option::as_deref))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Row {
        let columns: Arc<[String]> = vec!["id".to_string(), "name".to_string(), "age".to_string()].into();
        Row::new(columns, vec![Some("1".to_string()), Some("Alice".to_string()), None])
    }

    #[test]
    fn test_get_by_column() {
        let row = sample();
        assert_eq!(row.get("name"), Some("Alice"));
        assert_eq!(row.get("age"), None);
        assert!(row.contains_column("age"));
        assert!(!row.contains_column("email"));
    }

    #[test]
    fn test_serializes_in_header_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"Alice","age":null}"#);
    }
}

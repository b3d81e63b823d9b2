//! Runtime kinds of JSON values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a JSON value, used to declare the expected type of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `{ ... }`
    #[serde(alias = "dict", alias = "map")]
    Object,
    /// `[ ... ]`
    #[serde(alias = "list", alias = "sequence")]
    Array,
    #[serde(alias = "str")]
    String,
    /// Any number, integral or not
    Number,
    /// A number written without fraction or exponent
    #[serde(alias = "int")]
    Integer,
    /// A number held as floating point
    Float,
    #[serde(alias = "bool")]
    Boolean,
    Null,
}

impl JsonType {
    /// The most specific kind of a value. Numbers are `Integer` or `Float`,
    /// never `Number`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonType::Object,
            Value::Array(_) => JsonType::Array,
            Value::String(_) => JsonType::String,
            Value::Number(n) if n.is_f64() => JsonType::Float,
            Value::Number(_) => JsonType::Integer,
            Value::Bool(_) => JsonType::Boolean,
            Value::Null => JsonType::Null,
        }
    }

    /// Whether `value` is of this kind.
    pub fn matches(self, value: &Value) -> bool {
        let actual = JsonType::of(value);
        match self {
            JsonType::Number => matches!(actual, JsonType::Integer | JsonType::Float),
            expected => expected == actual,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Float => "float",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "object" | "dict" | "map" => Ok(JsonType::Object),
            "array" | "list" | "sequence" => Ok(JsonType::Array),
            "string" | "str" => Ok(JsonType::String),
            "number" => Ok(JsonType::Number),
            "integer" | "int" => Ok(JsonType::Integer),
            "float" => Ok(JsonType::Float),
            "boolean" | "bool" => Ok(JsonType::Boolean),
            "null" => Ok(JsonType::Null),
            other => Err(format!("unknown JSON type: {}", other)),
        }
    }
}

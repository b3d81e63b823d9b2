//! Structured-object (JSON) reader
//!
//! Parses JSON text into a [`serde_json::Value`] and, when the root is an
//! object, checks required keys and declared value kinds. The value is
//! returned exactly as parsed.

pub mod config;
pub mod error;
pub mod reader;
pub mod types;

pub use config::JsonOptions;
pub use error::JsonError;
pub use reader::{read_json, read_json_file, read_json_from};
pub use types::JsonType;

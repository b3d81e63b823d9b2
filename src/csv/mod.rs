//! Delimited-text reader
//!
//! Reads a header plus data rows from delimited text and validates, in order:
//! - no blank lines after the header (rewindable sources only)
//! - a header is present and shaped like one
//! - every required field appears in the header
//! - rows have no extra values and no blank required values
//!
//! Values are returned as strings exactly as they appear in the input.

pub mod config;
pub mod error;
mod header;
mod input;
pub mod reader;
pub mod row;

pub use config::CsvOptions;
pub use error::CsvError;
pub use reader::{read_csv, read_csv_file, read_csv_str};
pub use row::Row;

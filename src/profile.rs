//! Validation profiles
//!
//! A profile is one reader's validation options stored in a file, so the same
//! rules can be applied to many inputs. The file format follows the extension:
//! `.toml`, `.yaml`/`.yml` or `.json`. The `format` key selects the reader:
//!
//! ```toml
//! format = "csv"
//! required_fields = ["id", "name"]
//! delimiter = ";"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::csv::{CsvError, CsvOptions, Row, read_csv};
use crate::json::{JsonError, JsonOptions, read_json_from};
use crate::source::Source;
#[cfg(feature = "xml")]
use crate::xml::{Element, XmlError, XmlOptions, read_xml};

/// Input formats handled by the readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Csv,
    Json,
    Xml,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" | "tsv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
            Format::Xml => write!(f, "xml"),
        }
    }
}

/// Errors loading a profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error reading profile {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    #[error("Invalid profile {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported profile extension (expected .toml, .yaml, .yml or .json): {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("Format '{0}' is not available in this build")]
    Unavailable(Format),
}

/// Options for one reader, tagged by `format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum ValidationProfile {
    Csv(CsvOptions),
    Json(JsonOptions),
    #[cfg(feature = "xml")]
    Xml(XmlOptions),
}

/// Output of a profile-driven read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", content = "data", rename_all = "lowercase")]
pub enum Document {
    Csv(Vec<Row>),
    Json(serde_json::Value),
    #[cfg(feature = "xml")]
    Xml(Element),
}

/// Error from whichever reader a profile selected.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error(transparent)]
    Json(#[from] JsonError),
    #[cfg(feature = "xml")]
    #[error(transparent)]
    Xml(#[from] XmlError),
}

impl ReadError {
    pub fn is_source_error(&self) -> bool {
        match self {
            ReadError::Csv(e) => e.is_source_error(),
            ReadError::Json(e) => e.is_source_error(),
            #[cfg(feature = "xml")]
            ReadError::Xml(e) => e.is_source_error(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ReadError::Csv(e) => e.kind(),
            ReadError::Json(e) => e.kind(),
            #[cfg(feature = "xml")]
            ReadError::Xml(e) => e.kind(),
        }
    }
}

impl ValidationProfile {
    /// Default (rule-free) options for a format.
    pub fn for_format(format: Format) -> Result<Self, ProfileError> {
        match format {
            Format::Csv => Ok(ValidationProfile::Csv(CsvOptions::default())),
            Format::Json => Ok(ValidationProfile::Json(JsonOptions::default())),
            #[cfg(feature = "xml")]
            Format::Xml => Ok(ValidationProfile::Xml(XmlOptions::default())),
            #[cfg(not(feature = "xml"))]
            Format::Xml => Err(ProfileError::Unavailable(format)),
        }
    }

    /// Load a profile file, picking the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ProfileError::NotFound(path.to_path_buf()),
            _ => ProfileError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parsed = match extension.as_deref() {
            Some("toml") => Self::from_toml(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => return Err(ProfileError::UnsupportedExtension(path.to_path_buf())),
        };
        let profile = parsed.map_err(|message| ProfileError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(path = %path.display(), format = %profile.format(), "Loaded validation profile");
        Ok(profile)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    pub fn format(&self) -> Format {
        match self {
            ValidationProfile::Csv(_) => Format::Csv,
            ValidationProfile::Json(_) => Format::Json,
            #[cfg(feature = "xml")]
            ValidationProfile::Xml(_) => Format::Xml,
        }
    }

    /// Run the selected reader over a source.
    pub fn read<'a>(&self, source: impl Into<Source<'a>>) -> Result<Document, ReadError> {
        let source = source.into();
        match self {
            ValidationProfile::Csv(options) => Ok(Document::Csv(read_csv(source, options)?)),
            ValidationProfile::Json(options) => {
                Ok(Document::Json(read_json_from(source, options)?))
            }
            #[cfg(feature = "xml")]
            ValidationProfile::Xml(options) => Ok(Document::Xml(read_xml(source, options)?)),
        }
    }
}

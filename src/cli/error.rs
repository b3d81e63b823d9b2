//! CLI error types

use ingest_guard::{ProfileError, ReadError, SourceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Rejected(#[from] ReadError),
}

impl CliError {
    /// Process exit code: 1 when the content was rejected, 2 when the input
    /// or the invocation could not be used at all.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rejected(e) if !e.is_source_error() => 1,
            _ => 2,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CliError::InvalidArgument(_) => "invalid_argument",
            CliError::Profile(_) => "profile",
            CliError::Source(SourceError::FileNotFound(_)) => "file_not_found",
            CliError::Source(_) => "source",
            CliError::Rejected(e) => e.kind(),
        }
    }
}

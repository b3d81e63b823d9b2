//! CLI command implementations

pub mod validate;

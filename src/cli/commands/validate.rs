//! Validate command implementation

use std::path::{Path, PathBuf};

use clap::Args;
use ingest_guard::source::open_file;
use ingest_guard::{Document, Format, Source, ValidationProfile};
use tracing::debug;

use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input file, or `-` for stdin
    pub input: String,

    /// Input format (inferred from the profile or the file extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Validation profile (.toml, .yaml, .yml or .json)
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Required CSV field, JSON key or XML tag (repeatable)
    #[arg(short, long = "required", value_name = "NAME")]
    pub required: Vec<String>,

    /// CSV field separator
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Resolve the format: explicit flag, then profile, then input extension.
fn resolve_format(args: &ValidateArgs, profile: Option<&ValidationProfile>) -> Result<Format, CliError> {
    if let Some(format) = args.format {
        if let Some(profile) = profile
            && profile.format() != format
        {
            return Err(CliError::InvalidArgument(format!(
                "--format {} conflicts with the profile's format {}",
                format,
                profile.format()
            )));
        }
        return Ok(format);
    }
    if let Some(profile) = profile {
        return Ok(profile.format());
    }
    if args.input != "-"
        && let Some(format) = Format::from_path(&args.input)
    {
        return Ok(format);
    }
    Err(CliError::InvalidArgument(format!(
        "Cannot infer the format of '{}'; pass --format",
        args.input
    )))
}

fn merge_required(existing: &mut Vec<String>, extra: &[String]) {
    for name in extra {
        if !existing.contains(name) {
            existing.push(name.clone());
        }
    }
}

/// Build the effective profile: the profile file (or an empty one) with the
/// inline flags applied on top.
pub fn build_profile(args: &ValidateArgs) -> Result<ValidationProfile, CliError> {
    let loaded = args.profile.as_ref().map(ValidationProfile::load).transpose()?;
    let format = resolve_format(args, loaded.as_ref())?;
    let mut profile = match loaded {
        Some(profile) => profile,
        None => ValidationProfile::for_format(format)?,
    };

    if args.delimiter.is_some() && format != Format::Csv {
        return Err(CliError::InvalidArgument(
            "--delimiter only applies to CSV input".to_string(),
        ));
    }

    match &mut profile {
        ValidationProfile::Csv(options) => {
            if let Some(delimiter) = args.delimiter {
                if !delimiter.is_ascii() {
                    return Err(CliError::InvalidArgument(format!(
                        "Delimiter must be a single ASCII character, got '{}'",
                        delimiter
                    )));
                }
                options.delimiter = delimiter as u8;
            }
            if !args.required.is_empty() {
                merge_required(
                    options.required_fields.get_or_insert_with(Vec::new),
                    &args.required,
                );
            }
        }
        ValidationProfile::Json(options) => {
            if !args.required.is_empty() {
                merge_required(
                    options.required_keys.get_or_insert_with(Vec::new),
                    &args.required,
                );
            }
        }
        ValidationProfile::Xml(options) => {
            merge_required(&mut options.required_tags, &args.required);
        }
    }

    debug!(format = %profile.format(), "Effective validation profile built");
    Ok(profile)
}

/// Handle the validate command
pub fn handle_validate(args: &ValidateArgs) -> Result<(Format, Document), CliError> {
    let profile = build_profile(args)?;

    let document = if args.input == "-" {
        debug!("Reading input from stdin");
        let stdin = std::io::stdin().lock();
        read_with(&profile, Source::stream(stdin))?
    } else {
        let file = open_file(Path::new(&args.input))?;
        read_with(&profile, Source::from(file))?
    };

    Ok((profile.format(), document))
}

fn read_with(profile: &ValidationProfile, source: Source<'_>) -> Result<Document, CliError> {
    Ok(profile.read(source)?)
}

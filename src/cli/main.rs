//! Command-line front end for the ingest-guard readers

mod commands;
mod error;
mod output;

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::validate::{ValidateArgs, handle_validate};
use crate::output::{OutputFormat, format_failure, format_success};

#[derive(Parser)]
#[command(name = "ingest-guard")]
#[command(about = "Validate CSV, JSON and XML input before it is ingested", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one input and report whether it passes validation
    Validate(ValidateArgs),
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match (quiet, verbose) {
        (true, _) => EnvFilter::new("off"),
        (false, 0) => EnvFilter::new("ingest_guard=error"),
        (false, 1) => EnvFilter::new("ingest_guard=debug"),
        (false, _) => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Validate(args) => match handle_validate(&args) {
            Ok((format, document)) => {
                let report = format_success(&args.input, format, &document, args.output);
                writeln!(std::io::stdout(), "{}", report).context("Failed to write report")?;
                Ok(())
            }
            Err(e) => {
                let report = format_failure(&args.input, &e, args.output);
                let written = match args.output {
                    OutputFormat::Json => writeln!(std::io::stdout(), "{}", report),
                    OutputFormat::Text => writeln!(std::io::stderr(), "{}", report),
                };
                written.context("Failed to write report")?;
                std::process::exit(e.exit_code());
            }
        },
    }
}

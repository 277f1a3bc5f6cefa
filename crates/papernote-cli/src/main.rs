//! Command line interface for the papernote library.
//!
//! Turns one identifier into one note:
//!
//! ```bash
//! # A DOI, looked up through the Crossref registry
//! papernote https://doi.org/10.1103/PhysRevB.101.045401 ~/notes/papers
//!
//! # An arXiv abstract page
//! papernote https://arxiv.org/abs/2301.07041 ~/notes/papers
//!
//! # Force the source and use a specific template, with debug logging
//! papernote -vvv --origin crossref --template my_template.md 10.1103/PhysRevB.101.045401 .
//! ```
//!
//! The note is named after its first author, year and journal (`Smith2020_PRB.md`) and is
//! never overwritten: if the file exists the run fails and the file is left alone.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use clap::{builder::ArgAction, Parser};
use console::style;
use papernote::{config::Config, prelude::*, record::Record, Papernote};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod interaction;

use crate::{error::*, interaction::*};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Turn a DOI or an arXiv link into a Markdown note")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Configuration file. Defaults to the platform config directory, e.g.
  /// `~/.config/papernote/config.toml`; a missing default file means default settings.
  #[arg(long, short)]
  config: Option<PathBuf>,

  /// Template file to render the note with, instead of `paper_template.md` next to the
  /// executable.
  #[arg(long, short)]
  template: Option<PathBuf>,

  /// Force the metadata source (`crossref` or `arxiv`) instead of guessing it.
  #[arg(long)]
  origin: Option<Origin>,

  /// DOI (bare or as a doi.org link) or arXiv abstract page URL
  identifier: String,

  /// Directory the note is written to. Must already exist.
  output_dir: PathBuf,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Loads the configuration named on the command line, or the default one.
fn load_config(cli: &Cli) -> Result<Config> {
  let config = match &cli.config {
    Some(path) => Config::load(path)?,
    None => Config::load_or_default(Config::default_path())?,
  };
  Ok(match &cli.template {
    Some(template) => config.with_template_path(template),
    None => config,
  })
}

/// Runs the pipeline for the parsed arguments and returns the written note's path.
async fn run<I: UserInteraction>(interaction: &I, cli: &Cli) -> Result<PathBuf> {
  if !cli.output_dir.is_dir() {
    return Err(PapernoteCliError::OutputDirectory(cli.output_dir.clone()));
  }

  let config = load_config(cli)?;
  trace!("Using configuration: {:?}", config);
  let papernote = Papernote::new(config)?;

  let origin = cli.origin.unwrap_or_else(|| Origin::resolve(&cli.identifier));
  interaction
    .reply(ResponseContent::Info(&format!("Fetching {} from {}", cli.identifier, origin)))?;
  let record = papernote.fetch_record(&cli.identifier, Some(origin)).await?;
  interaction.reply(ResponseContent::Record(&record))?;

  let note = papernote.compose(&record, &cli.identifier)?;
  debug!("Composed note {}", note.base_name);
  let path = note.write_to(&cli.output_dir).await?;
  interaction.reply(ResponseContent::Success(&format!("Created {}", path.display())))?;
  Ok(path)
}

/// Entry point for the papernote CLI
///
/// Exits with a non-zero status after printing the error when any step fails. Argument
/// errors, including an unknown `--origin`, are reported by the argument parser.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let terminal = Terminal::new();
  match run(&terminal, &cli).await {
    Ok(_) => ExitCode::SUCCESS,
    Err(e) => {
      // Nothing more can be done if stderr itself is gone.
      let _ = terminal.reply(ResponseContent::Error(e));
      ExitCode::FAILURE
    },
  }
}

//! Turn a bibliographic identifier into a Markdown reading note.
//!
//! `papernote` takes a DOI (bare or as a `https://doi.org/` link) or an arXiv
//! abstract page URL and produces a note file:
//!
//! - metadata is fetched from the Crossref registry or scraped from the arXiv page
//! - authors, title, year, journal and abstract are normalized
//! - the journal name is shortened through a lookup table
//! - everything is rendered into a `$`-placeholder template and written once
//!
//! # Getting Started
//!
//! ```no_run
//! use papernote::{config::Config, Papernote};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let papernote = Papernote::new(Config::default())?;
//!
//!   // Fetch, normalize, render and write `Smith2020_PRB.md` into `notes/`
//!   let path = papernote.create_note("https://doi.org/10.1103/PhysRevB.101.000000", None, "notes").await?;
//!   println!("Wrote {}", path.display());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`source`]: Classifying identifiers into an [`Origin`]
//! - [`retriever`]: Fetching raw metadata and extracting a [`Record`] from it
//! - [`format`]: String cleanup shared by the extractors
//! - [`journal`]: The journal short-name table
//! - [`note`]: Composing and writing the final note
//! - [`template`]: Strict `$`-placeholder substitution
//! - [`config`]: User configuration
//! - [`error`]: The [`PapernoteError`] type

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::BTreeMap,
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod error;
pub mod format;
pub mod journal;
pub mod note;
pub mod record;
pub mod retriever;
pub mod source;
pub mod template;

use crate::{
  config::Config,
  error::*,
  journal::JournalTable,
  note::Note,
  record::{Author, Record},
  retriever::Retriever,
  source::Origin,
  template::Template,
};

/// Everything needed to turn an identifier into a note.
///
/// A [`Papernote`] is built once from a [`Config`]: the HTTP client, the journal
/// table and the template are all fixed at that point and only read afterwards.
#[derive(Debug)]
pub struct Papernote {
  /// The configuration this instance was built from.
  config:    Config,
  /// Client used to fetch metadata.
  retriever: Retriever,
  /// Built-in journal abbreviations merged with the configured ones.
  journals:  JournalTable,
  /// Template every note is rendered with.
  template:  Template,
}

impl Papernote {
  /// Builds a new instance from `config`.
  ///
  /// The template is read from `config.template_path` when set, otherwise it is
  /// discovered next to the running executable (see [`Template::discover`]).
  ///
  /// # Errors
  ///
  /// Fails if the HTTP client cannot be built or the configured template cannot be read.
  pub fn new(config: Config) -> Result<Self> {
    let retriever = Retriever::new(&config)?;
    let journals = JournalTable::default().with_entries(config.journal_abbreviations.clone());
    let template = match &config.template_path {
      Some(path) => Template::from_file(path)?,
      None => Template::discover()?,
    };
    debug!("Using {} journal abbreviations", journals.len());
    Ok(Self { config, retriever, journals, template })
  }

  /// Replaces the template notes are rendered with.
  pub fn with_template(mut self, template: Template) -> Self {
    self.template = template;
    self
  }

  /// The configuration this instance was built from.
  pub fn config(&self) -> &Config { &self.config }

  /// The journal table used for shortening.
  pub fn journals(&self) -> &JournalTable { &self.journals }

  /// Fetches and normalizes the metadata for `identifier`.
  ///
  /// When `origin` is `None` it is resolved from the identifier itself.
  pub async fn fetch_record(&self, identifier: &str, origin: Option<Origin>) -> Result<Record> {
    let origin = origin.unwrap_or_else(|| Origin::resolve(identifier));
    info!("Making request for {} with {}", identifier, origin);
    let raw = self.retriever.fetch(identifier, origin).await?;
    raw.normalize(&self.journals)
  }

  /// Renders `record` into a [`Note`], recording `identifier` as its DOI field.
  pub fn compose(&self, record: &Record, identifier: &str) -> Result<Note> {
    Note::compose(record, identifier, &self.template)
  }

  /// Runs the whole pipeline and returns the path of the written note.
  ///
  /// # Errors
  ///
  /// Any failure aborts the run: nothing is written unless every step succeeded,
  /// and an existing note is never overwritten.
  pub async fn create_note(
    &self,
    identifier: &str,
    origin: Option<Origin>,
    output_dir: impl AsRef<Path>,
  ) -> Result<PathBuf> {
    let record = self.fetch_record(identifier, origin).await?;
    let note = self.compose(&record, identifier)?;
    let path = note.write_to(output_dir).await?;
    info!(
      authors = ?record.authors.iter().map(ToString::to_string).collect::<Vec<_>>(),
      title = %record.title,
      year = record.year,
      journal = %record.journal,
      "Wrote note {}",
      note.base_name
    );
    Ok(path)
  }
}

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use papernote::{config::Config, prelude::*, Papernote};
///
/// async fn example() -> Result<(), PapernoteError> {
///   let papernote = Papernote::new(Config::default())?;
///   let record = papernote.fetch_record("https://arxiv.org/abs/2301.07041", None).await?;
///   println!("{}", record.title);
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{error::PapernoteError, retriever::FieldExtractor, source::Origin};
}

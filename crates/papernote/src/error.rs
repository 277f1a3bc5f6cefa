//! Error types for the papernote library.
//!
//! Almost nothing is recovered locally. Optional metadata (abstract, year,
//! journal) falls back to sentinel values, everything else surfaces as a
//! [`PapernoteError`] and ends the run.
//!
//! # Examples
//!
//! ```no_run
//! use papernote::{config::Config, error::PapernoteError, Papernote};
//!
//! # async fn example() -> Result<(), PapernoteError> {
//! let papernote = Papernote::new(Config::default())?;
//! match papernote.create_note("10.1103/PhysRevB.101.000000", None, "notes").await {
//!   Err(PapernoteError::AlreadyExists(path)) => println!("{} is already there", path.display()),
//!   Err(PapernoteError::Fetch(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(path) => println!("Wrote {}", path.display()),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error type alias used for the [`papernote`](crate) crate.
pub type Result<T> = core::result::Result<T, PapernoteError>;

/// Errors that can occur while turning an identifier into a note.
#[derive(Error, Debug)]
pub enum PapernoteError {
  /// A network request failed or the server answered with a non-success status.
  ///
  /// This covers:
  /// - DNS, connection and TLS failures
  /// - 4xx/5xx responses from arXiv or the registry
  #[error(transparent)]
  Fetch(#[from] reqwest::Error),

  /// The registry answered, but not with the metadata we expect.
  ///
  /// This occurs when:
  /// - the top-level `status` field is not `"ok"`
  /// - a required field (title, authors, author family name) is missing
  /// - an arXiv `citation_date` does not start with a year
  #[error("Unexpected metadata: {0}")]
  Schema(String),

  /// A response body was not valid JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The note file already exists. It is left untouched.
  #[error("A note already exists at {}", .0.display())]
  AlreadyExists(PathBuf),

  /// The template contains an invalid placeholder or one nothing was supplied for.
  #[error("Template error: {0}")]
  Template(String),

  /// An origin name that is neither `crossref` nor `arxiv`.
  #[error("Invalid origin \"{0}\", expected `crossref` or `arxiv`")]
  InvalidOrigin(String),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - the configuration or template file cannot be read
  /// - the output directory does not exist or is not writable
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The configuration file is not valid TOML for [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// Any other configuration problem.
  #[error("{0}")]
  Config(String),
}

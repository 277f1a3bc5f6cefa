//! Error types for the papernote CLI.

use thiserror::Error;

use super::*;

/// Result type alias for the CLI.
pub type Result<T> = core::result::Result<T, PapernoteCliError>;

/// Errors that can end a CLI run.
#[derive(Error, Debug)]
pub enum PapernoteCliError {
  /// Any failure from the papernote library.
  #[error(transparent)]
  Papernote(#[from] PapernoteError),

  /// The output directory does not exist or is not a directory.
  #[error("{} is not a directory", .0.display())]
  OutputDirectory(PathBuf),

  /// Writing to the terminal failed.
  #[error(transparent)]
  Terminal(#[from] std::io::Error),
}

//! Terminal output.

use console::Term;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Continuation line for tree structure
pub static CONTINUE_PREFIX: &str = "│  ";
/// Prefix for items in a list
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last item in a list
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// The normalized metadata a note will be built from
  Record(&'a Record),
  /// A completed step
  Success(&'a str),
  /// A failed run
  Error(PapernoteCliError),
  /// Progress information
  Info(&'a str),
}

/// A way of talking to the user.
pub trait UserInteraction {
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Styled output on stdout, errors on stderr.
pub struct Terminal {
  /// Regular output
  stdout: Term,
  /// Error output
  stderr: Term,
}

impl Terminal {
  /// Attaches to the process's stdout and stderr.
  pub fn new() -> Self { Self { stdout: Term::stdout(), stderr: Term::stderr() } }
}

impl Default for Terminal {
  fn default() -> Self { Self::new() }
}

impl UserInteraction for Terminal {
  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Record(record) => {
        self.stdout.write_line(&format!(
          "{} {}",
          style(SUCCESS_PREFIX).green(),
          style(&record.title).white().bold()
        ))?;
        let fields = [
          ("Year", record.year.to_string()),
          ("Journal", record.journal.clone()),
          (
            "Authors",
            record.authors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
          ),
        ];
        let last = fields.len() - 1;
        for (index, (label, value)) in fields.iter().enumerate() {
          let branch = if index == last { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
          self.stdout.write_line(&format!(
            "{}{} {} {}",
            CONTINUE_PREFIX,
            style(branch).dim(),
            style(format!("{label}:")).cyan(),
            value
          ))?;
        }
      },
      ResponseContent::Success(message) => self
        .stdout
        .write_line(&format!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green()))?,
      ResponseContent::Info(message) =>
        self.stdout.write_line(&format!("{} {}", style(INFO_PREFIX).blue(), message))?,
      ResponseContent::Error(error) => self
        .stderr
        .write_line(&format!("{} {}", style(ERROR_PREFIX).red(), style(error).red()))?,
    }
    Ok(())
  }
}

//! Strict `$`-placeholder templates.
//!
//! Templates use the familiar shell-like syntax:
//!
//! - `$name` and `${name}` are replaced by the value supplied for `name`
//! - `$$` produces a literal `$`
//! - any other `$` is an invalid placeholder
//!
//! Substitution is strict: a placeholder with no supplied value is an error, as is an
//! invalid one. Substituted values are inserted verbatim and never scanned again, so an
//! abstract full of `$` signs is safe.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use papernote::template::Template;
//!
//! let template = Template::new("# $title\n\n${abstract} costs $$5");
//! let values = BTreeMap::from([("title", "A Study".to_string()), ("abstract", "$x$".to_string())]);
//! assert_eq!(template.substitute(&values).unwrap(), "# A Study\n\n$x$ costs $5");
//! ```

use super::*;

/// File name looked up next to the running executable.
pub const TEMPLATE_FILE_NAME: &str = "paper_template.md";

/// Template used when no template file can be found.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/paper_template.md");

lazy_static! {
  /// One alternative per placeholder form, tried in order. The empty `invalid` group
  /// catches any `$` the others do not.
  static ref PLACEHOLDER: Regex = Regex::new(
    r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))"
  )
  .unwrap();
}

/// A note template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
  /// Raw template text
  source: String,
}

impl Default for Template {
  fn default() -> Self { Self::new(DEFAULT_TEMPLATE) }
}

impl Template {
  /// Creates a template from its text.
  pub fn new(source: impl Into<String>) -> Self { Self { source: source.into() } }

  /// Reads a template file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Reading template from {}", path.display());
    Ok(Self::new(std::fs::read_to_string(path)?))
  }

  /// Finds the template shipped alongside the program.
  ///
  /// Looks for [`TEMPLATE_FILE_NAME`] in the directory of the running executable and
  /// falls back to [`DEFAULT_TEMPLATE`] when there is none.
  pub fn discover() -> Result<Self> {
    let executable = std::env::current_exe()?;
    match executable.parent().map(|dir| dir.join(TEMPLATE_FILE_NAME)) {
      Some(path) if path.is_file() => Self::from_file(path),
      _ => {
        warn!(
          "No {} next to {}, using the built-in template",
          TEMPLATE_FILE_NAME,
          executable.display()
        );
        Ok(Self::default())
      },
    }
  }

  /// The raw template text.
  pub fn source(&self) -> &str { &self.source }

  /// Names of all `$name`/`${name}` placeholders, in order of first appearance.
  pub fn placeholders(&self) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(&self.source) {
      if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
        if !names.contains(&name.as_str()) {
          names.push(name.as_str());
        }
      }
    }
    names
  }

  /// Replaces every placeholder with its value from `values`.
  ///
  /// # Errors
  ///
  /// Returns [`PapernoteError::Template`] if a placeholder has no value in `values` or a
  /// `$` does not start a valid placeholder.
  pub fn substitute(&self, values: &BTreeMap<&str, String>) -> Result<String> {
    let mut rendered = String::with_capacity(self.source.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(&self.source) {
      let Some(whole) = caps.get(0) else { continue };
      rendered.push_str(&self.source[last..whole.start()]);

      if caps.name("escaped").is_some() {
        rendered.push('$');
      } else if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
        let value = values.get(name.as_str()).ok_or_else(|| {
          PapernoteError::Template(format!("no value supplied for placeholder `{}`", name.as_str()))
        })?;
        rendered.push_str(value);
      } else {
        let (line, column) = self.position(whole.start());
        return Err(PapernoteError::Template(format!(
          "invalid placeholder in template: line {line}, col {column}"
        )));
      }

      last = whole.end();
    }

    rendered.push_str(&self.source[last..]);
    Ok(rendered)
  }

  /// 1-based line and column of a byte offset into the template.
  fn position(&self, offset: usize) -> (usize, usize) {
    let before = &self.source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rfind('\n').map_or(offset, |newline| offset - newline - 1) + 1;
    (line, column)
  }
}

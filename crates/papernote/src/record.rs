//! The normalized metadata every note is built from.

use super::*;

/// Year used when the source does not say when the work was published.
pub const UNKNOWN_YEAR: i32 = -1;

/// Journal used when the source gives no journal name.
pub const UNKNOWN_JOURNAL: &str = "unknown";

/// Abstract used when the source has none.
pub const MISSING_ABSTRACT: &str = "not found";

/// A single author, already normalized.
///
/// Both name components have had spaces replaced by hyphens and periods removed, so the
/// [`Display`] token (`family_given`) contains neither.
///
/// # Examples
///
/// ```
/// use papernote::record::Author;
///
/// let author = Author::new("Smith", Some("J."));
/// assert_eq!(author.to_string(), "Smith_J");
///
/// let author = Author::from_citation("Doe, Jane");
/// assert_eq!(author.to_string(), "Doe_Jane");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
  /// Normalized family name
  pub family: String,
  /// Normalized given name, if the source had one
  pub given:  Option<String>,
}

impl Author {
  /// Builds an author from raw name components.
  pub fn new(family: &str, given: Option<&str>) -> Self {
    Self {
      family: format::normalize_name_part(family),
      given:  given.map(format::normalize_name_part),
    }
  }

  /// Parses a `"family, given"` citation name as found in `citation_author` meta tags.
  ///
  /// Only the first `", "` separates the components. A name without separator is
  /// treated as a family name alone.
  pub fn from_citation(name: &str) -> Self {
    match name.split_once(", ") {
      Some((family, given)) => Self::new(family, Some(given)),
      None => Self::new(name, None),
    }
  }
}

impl Display for Author {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.given {
      Some(given) => write!(f, "{}_{}", self.family, given),
      None => write!(f, "{}", self.family),
    }
  }
}

/// Metadata for one work, ready to be composed into a note.
///
/// Extractors uphold two invariants: `authors` is never empty and `journal` is never empty
/// (it falls back to [`UNKNOWN_JOURNAL`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  /// The work's title
  pub title:         String,
  /// Publication year, or [`UNKNOWN_YEAR`]
  pub year:          i32,
  /// Journal name, shortened when the journal table knows it
  pub journal:       String,
  /// Authors in publication order
  pub authors:       Vec<Author>,
  /// Abstract with markup removed, or [`MISSING_ABSTRACT`]
  pub abstract_text: String,
  /// Where the metadata came from
  pub origin:        Origin,
}

impl Record {
  /// The first listed author.
  ///
  /// # Errors
  ///
  /// Returns [`PapernoteError::Schema`] if the record has no authors.
  pub fn first_author(&self) -> Result<&Author> {
    self
      .authors
      .first()
      .ok_or_else(|| PapernoteError::Schema(format!("no authors listed for \"{}\"", self.title)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_author_tokens() {
    assert_eq!(Author::new("Smith", Some("J.")).to_string(), "Smith_J");
    assert_eq!(Author::new("van der Waals", Some("J. D.")).to_string(), "van-der-Waals_J-D");
    assert_eq!(Author::new("Curie", None).to_string(), "Curie");
  }

  #[test]
  fn test_author_tokens_are_clean_and_stable() {
    for (family, given) in [("O'Brien", "Jean-Paul"), ("de la Cruz", "M. A."), ("Li", "X.")] {
      let token = Author::new(family, Some(given)).to_string();
      assert!(!token.contains(' '), "{token}");
      assert!(!token.contains('.'), "{token}");
      let (family_part, given_part) = token.split_once('_').unwrap();
      assert_eq!(Author::new(family_part, Some(given_part)).to_string(), token);
    }
  }

  #[test]
  fn test_author_from_citation() {
    assert_eq!(Author::from_citation("Doe, Jane").to_string(), "Doe_Jane");
    assert_eq!(Author::from_citation("O'Brien, Jean-Paul").to_string(), "O'Brien_Jean-Paul");
    assert_eq!(Author::from_citation("Collaboration").to_string(), "Collaboration");
  }

  #[test]
  fn test_first_author() {
    let mut record = Record {
      title:         "A Study".into(),
      year:          2020,
      journal:       "PRB".into(),
      authors:       vec![Author::new("Smith", Some("J."))],
      abstract_text: "Text".into(),
      origin:        Origin::Crossref,
    };
    assert_eq!(record.first_author().unwrap().family, "Smith");

    record.authors.clear();
    assert!(matches!(record.first_author(), Err(PapernoteError::Schema(_))));
  }
}

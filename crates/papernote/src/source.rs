//! Classifying identifiers by where their metadata comes from.

use super::*;

/// Where metadata for an identifier is fetched from.
///
/// The origin is decided once, before fetching, and selects the extraction rules used
/// afterwards.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use papernote::source::Origin;
///
/// assert_eq!(Origin::resolve("https://arxiv.org/abs/2301.07041"), Origin::Arxiv);
/// assert_eq!(Origin::resolve("10.1103/PhysRevB.101.000000"), Origin::Crossref);
/// assert_eq!(Origin::from_str("arxiv").unwrap(), Origin::Arxiv);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
  /// A DOI, resolved through the Crossref registry's JSON API
  Crossref,
  /// An arXiv abstract page, read from its `citation_*` meta tags
  Arxiv,
}

impl Origin {
  /// Classifies an identifier.
  ///
  /// Anything mentioning `arxiv` (or `arXiv`) is an arXiv page, everything else is treated
  /// as a DOI. This never fails; a bogus identifier is only noticed when fetching.
  pub fn resolve(identifier: &str) -> Self {
    if identifier.contains("arxiv") || identifier.contains("arXiv") {
      Self::Arxiv
    } else {
      Self::Crossref
    }
  }
}

impl Display for Origin {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Crossref => write!(f, "crossref"),
      Self::Arxiv => write!(f, "arxiv"),
    }
  }
}

impl FromStr for Origin {
  type Err = PapernoteError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "crossref" | "doi" => Ok(Self::Crossref),
      "arxiv" => Ok(Self::Arxiv),
      _ => Err(PapernoteError::InvalidOrigin(s.to_string())),
    }
  }
}

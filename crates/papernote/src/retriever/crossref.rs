//! Crossref works API responses.
//!
//! Only the fields the note needs are modelled; everything else in the `message` object
//! is ignored.

use super::*;

/// Envelope of a Crossref works response.
#[derive(Debug, Deserialize)]
struct CrossrefResponse {
  /// `"ok"` on success
  status:  String,
  /// The work metadata, when `status` is `"ok"`
  #[serde(default)]
  message: serde_json::Value,
}

/// Metadata about a work, from the `message` object of a Crossref response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrossrefWork {
  /// Titles, the first one is used
  #[serde(default)]
  pub title:                 Vec<String>,
  /// Authors in publication order
  #[serde(default)]
  pub author:                Vec<CrossrefAuthor>,
  /// JATS-marked-up abstract, absent for many works
  #[serde(rename = "abstract", default)]
  pub abstract_text:         Option<String>,
  /// Print publication date
  #[serde(default)]
  pub published_print:       Option<CrossrefDate>,
  /// Abbreviated journal names, the first one is used
  #[serde(default)]
  pub short_container_title: Vec<String>,
}

/// An author entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrossrefAuthor {
  /// Family (last) name
  pub family: Option<String>,
  /// Given (first) name
  pub given:  Option<String>,
}

/// Date in Crossref's `date-parts` form: `[[year, month, day]]` with month and day optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrossrefDate {
  /// The date parts; individual parts may be `null`
  #[serde(rename = "date-parts", default)]
  pub date_parts: Vec<Vec<Option<i32>>>,
}

impl CrossrefDate {
  /// The year, i.e. `date-parts[0][0]`.
  pub fn year(&self) -> Option<i32> { self.date_parts.first()?.first().copied().flatten() }
}

impl CrossrefAuthor {
  /// Converts to a normalized [`Author`].
  ///
  /// # Errors
  ///
  /// A missing family name is a [`PapernoteError::Schema`].
  pub fn to_author(&self) -> Result<Author> {
    let family = self.family.as_deref().ok_or_else(|| {
      PapernoteError::Schema(format!("author without family name (given: {:?})", self.given))
    })?;
    Ok(Author::new(family, self.given.as_deref()))
  }
}

impl CrossrefWork {
  /// Parses a complete works response body.
  ///
  /// # Errors
  ///
  /// - [`PapernoteError::Json`] if the body is not JSON or has no `status`
  /// - [`PapernoteError::Schema`] if `status` is not `"ok"` or `message` is not a work
  pub fn from_response(data: &[u8]) -> Result<Self> {
    let response: CrossrefResponse = serde_json::from_slice(data)?;
    if response.status != "ok" {
      return Err(PapernoteError::Schema(format!(
        "registry answered with status \"{}\"",
        response.status
      )));
    }
    serde_json::from_value(response.message)
      .map_err(|e| PapernoteError::Schema(format!("malformed work metadata: {e}")))
  }
}

impl FieldExtractor for CrossrefWork {
  fn extract(&self) -> Result<Record> {
    let title = self
      .title
      .first()
      .cloned()
      .ok_or_else(|| PapernoteError::Schema("work has no title".to_string()))?;

    let abstract_text = match &self.abstract_text {
      Some(abstract_text) => format::clean_abstract(abstract_text),
      None => {
        warn!("No abstract found for \"{}\"", title);
        record::MISSING_ABSTRACT.to_string()
      },
    };

    let authors = self.author.iter().map(CrossrefAuthor::to_author).collect::<Result<Vec<_>>>()?;
    if authors.is_empty() {
      return Err(PapernoteError::Schema(format!("no authors listed for \"{title}\"")));
    }

    let year =
      self.published_print.as_ref().and_then(CrossrefDate::year).unwrap_or(record::UNKNOWN_YEAR);

    let journal = match self.short_container_title.first().map(|name| format::strip_journal_name(name)) {
      Some(journal) if !journal.is_empty() => journal,
      _ => {
        warn!("Unknown journal name ({:?})", self.short_container_title);
        record::UNKNOWN_JOURNAL.to_string()
      },
    };

    Ok(Record { title, year, journal, authors, abstract_text, origin: Origin::Crossref })
  }
}

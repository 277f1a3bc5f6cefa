//! arXiv abstract pages.
//!
//! arXiv exposes bibliographic metadata as `<meta name="citation_*">` tags on every
//! abstract page, which is all this module reads.

use scraper::{Html, Selector};

use super::*;

/// Journal recorded for every arXiv preprint.
pub const ARXIV_JOURNAL: &str = "arxiv";

/// Any `citation_date` at or before this year is a defect in the page or in our parsing.
const EARLIEST_PLAUSIBLE_YEAR: i32 = 1900;

lazy_static! {
  /// Every `<meta>` element.
  static ref META: Selector = Selector::parse("meta").unwrap();
}

/// A parsed arXiv abstract page.
#[derive(Debug, Clone)]
pub struct ArxivPage {
  /// The parsed HTML document
  document: Html,
}

impl ArxivPage {
  /// Parses an HTML page. HTML parsing never fails; a page without meta tags simply
  /// yields no metadata.
  pub fn parse(html: &str) -> Self { Self { document: Html::parse_document(html) } }

  /// `(name, content)` of every `<meta>` tag with a `name` attribute, in document order.
  pub fn meta_tags(&self) -> impl Iterator<Item = (&str, &str)> {
    self.document.select(&META).filter_map(|element| {
      let element = element.value();
      Some((element.attr("name")?, element.attr("content").unwrap_or_default()))
    })
  }
}

/// Parses the year out of a `citation_date` such as `2021/05/01`.
///
/// # Errors
///
/// Returns [`PapernoteError::Schema`] if the text before the first `/` is not an integer.
///
/// # Panics
///
/// Panics if the year is not after 1900. Such a year means the page or this parser is
/// broken, and no note should be written from it.
pub fn parse_citation_year(date: &str) -> Result<i32> {
  let leading = date.split('/').next().unwrap_or_default().trim();
  let year: i32 = leading.parse().map_err(|_| {
    PapernoteError::Schema(format!("citation_date \"{date}\" does not start with a year"))
  })?;
  assert!(year > EARLIEST_PLAUSIBLE_YEAR, "Year is not valid: {year}");
  Ok(year)
}

impl FieldExtractor for ArxivPage {
  fn extract(&self) -> Result<Record> {
    let mut authors = Vec::new();
    let mut title = None;
    let mut year = record::UNKNOWN_YEAR;
    let mut abstract_text = None;

    for (name, content) in self.meta_tags() {
      match name {
        "citation_author" => authors.push(Author::from_citation(content)),
        "citation_title" => title = Some(content.to_string()),
        "citation_date" => year = parse_citation_year(content)?,
        "citation_abstract" => abstract_text = Some(content.to_string()),
        _ => trace!("Skipping meta tag {}", name),
      }
    }

    let title = title
      .ok_or_else(|| PapernoteError::Schema("page has no citation_title meta tag".to_string()))?;
    if authors.is_empty() {
      return Err(PapernoteError::Schema(format!("no citation_author meta tags for \"{title}\"")));
    }
    let abstract_text = abstract_text.unwrap_or_else(|| {
      warn!("No abstract found for \"{}\"", title);
      record::MISSING_ABSTRACT.to_string()
    });

    Ok(Record {
      title,
      year,
      journal: ARXIV_JOURNAL.to_string(),
      authors,
      abstract_text,
      origin: Origin::Arxiv,
    })
  }
}

//! Fetching raw metadata and extracting a [`Record`] from it.
//!
//! Retrieval happens in two steps:
//!
//! 1. [`Retriever::fetch`] issues one HTTP request and returns [`RawMetadata`] tagged with
//!    its [`Origin`]: the Crossref `message` object for DOIs, the parsed HTML page for arXiv.
//! 2. [`RawMetadata::normalize`] hands the payload to its [`FieldExtractor`] and then
//!    shortens the journal name through the [`JournalTable`].
//!
//! # Examples
//!
//! ```no_run
//! use papernote::{config::Config, journal::JournalTable, retriever::Retriever, source::Origin};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let retriever = Retriever::new(&Config::default())?;
//! let raw = retriever.fetch("https://doi.org/10.1103/PhysRevB.101.000000", Origin::Crossref).await?;
//! let record = raw.normalize(&JournalTable::default())?;
//! println!("{} ({})", record.title, record.journal);
//! # Ok(())
//! # }
//! ```

use super::*;

mod arxiv;
mod crossref;

pub use arxiv::{parse_citation_year, ArxivPage, ARXIV_JOURNAL};
pub use crossref::{CrossrefAuthor, CrossrefDate, CrossrefWork};

/// Origin-tagged metadata as returned by the source, before normalization.
#[derive(Debug, Clone)]
pub enum RawMetadata {
  /// The `message` object of a Crossref works response
  Crossref(CrossrefWork),
  /// An arXiv abstract page
  Arxiv(ArxivPage),
}

/// Extraction rules for one kind of raw metadata.
///
/// Implementors turn their payload into a [`Record`] whose journal has not been
/// shortened yet. Missing optional fields take the sentinel values from [`record`];
/// missing required fields are a [`PapernoteError::Schema`].
pub trait FieldExtractor {
  /// Extracts title, year, journal, authors and abstract.
  fn extract(&self) -> Result<Record>;
}

impl RawMetadata {
  /// Where this metadata came from.
  pub fn origin(&self) -> Origin {
    match self {
      Self::Crossref(_) => Origin::Crossref,
      Self::Arxiv(_) => Origin::Arxiv,
    }
  }

  /// Extracts a [`Record`] and shortens its journal name.
  pub fn normalize(&self, journals: &JournalTable) -> Result<Record> {
    let extractor = match self {
      Self::Crossref(work) => work as &dyn FieldExtractor,
      Self::Arxiv(page) => page as &dyn FieldExtractor,
    };
    let mut record = extractor.extract()?;
    record.journal = journals.shorten(&record.journal);
    debug!("Normalized {} record: {:?}", self.origin(), record);
    Ok(record)
  }
}

/// HTTP client for both metadata sources.
#[derive(Debug, Clone)]
pub struct Retriever {
  /// Internal web client used for every request.
  client:            reqwest::Client,
  /// Registry endpoint template containing `{doi}`.
  endpoint_template: String,
  /// Prefixes stripped from identifiers to get a bare DOI.
  doi_prefixes:      Vec<String>,
}

impl Retriever {
  /// Creates a retriever from the registry settings in `config`.
  pub fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder().user_agent(config.user_agent()).build()?;
    Ok(Self {
      client,
      endpoint_template: config.registry_endpoint.clone(),
      doi_prefixes: config.doi_prefixes.clone(),
    })
  }

  /// Strips the first matching DOI URL prefix from `identifier`.
  ///
  /// ```
  /// # use papernote::{config::Config, retriever::Retriever};
  /// let retriever = Retriever::new(&Config::default()).unwrap();
  /// assert_eq!(retriever.bare_doi("https://doi.org/10.1103/X.1"), "10.1103/X.1");
  /// assert_eq!(retriever.bare_doi("10.1103/X.1"), "10.1103/X.1");
  /// ```
  pub fn bare_doi<'a>(&self, identifier: &'a str) -> &'a str {
    self
      .doi_prefixes
      .iter()
      .find_map(|prefix| identifier.strip_prefix(prefix.as_str()))
      .unwrap_or(identifier)
  }

  /// The registry URL for a DOI identifier.
  pub fn registry_url(&self, identifier: &str) -> String {
    self.endpoint_template.replace("{doi}", self.bare_doi(identifier))
  }

  /// Fetches the raw metadata for `identifier` from `origin`.
  ///
  /// Exactly one request is made. Nothing is retried.
  ///
  /// # Errors
  ///
  /// - [`PapernoteError::Fetch`] on network failure or a non-success status
  /// - [`PapernoteError::Json`] if the registry body is not JSON
  /// - [`PapernoteError::Schema`] if the registry status is not `"ok"`
  pub async fn fetch(&self, identifier: &str, origin: Origin) -> Result<RawMetadata> {
    match origin {
      Origin::Arxiv => {
        let body = self.get(identifier).await?;
        Ok(RawMetadata::Arxiv(ArxivPage::parse(&body)))
      },
      Origin::Crossref => {
        let url = self.registry_url(identifier);
        info!("Looking up DOI {}", self.bare_doi(identifier));
        let body = self.get(&url).await?;
        Ok(RawMetadata::Crossref(CrossrefWork::from_response(body.as_bytes())?))
      },
    }
  }

  /// GETs `url` and returns the body, failing on non-success statuses.
  async fn get(&self, url: &str) -> Result<String> {
    debug!("Fetching {}", url);
    let response = self.client.get(url).send().await?.error_for_status()?;
    debug!("Response status: {}", response.status());
    let body = response.text().await?;
    trace!("Response body: {}", body);
    Ok(body)
  }
}

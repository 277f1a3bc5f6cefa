//! Composing a [`Record`] into a note and writing it out.
//!
//! A note is named `{family}{year}_{journal}` after its first author, e.g. `Smith2020_PRB`.
//! The same base name, with a `.pdf` extension, is handed to the template so the note can
//! link to the paper's PDF. Notes are written with exclusive-create semantics: an existing
//! file is never modified.

use std::io::ErrorKind;

use tokio::io::AsyncWriteExt;

use super::*;

/// A rendered note, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
  /// File name without extension, e.g. `Smith2020_PRB`
  pub base_name: String,
  /// Year/journal/author tag block
  pub tags:      String,
  /// Rendered template text
  pub body:      String,
}

impl Note {
  /// Renders `record` into `template`.
  ///
  /// The template receives `title`, `abstract`, `tags`, `DOI` (the original `identifier`)
  /// and `name` (the base name with a `.pdf` extension).
  ///
  /// # Errors
  ///
  /// - [`PapernoteError::Template`] if the template uses a placeholder not in that list
  /// - [`PapernoteError::Schema`] if the record has no authors
  pub fn compose(record: &Record, identifier: &str, template: &Template) -> Result<Self> {
    let base_name = base_name(record)?;
    let tags = tag_block(record);
    let values = BTreeMap::from([
      ("title", record.title.clone()),
      ("abstract", record.abstract_text.clone()),
      ("tags", tags.clone()),
      ("DOI", identifier.to_string()),
      ("name", format!("{base_name}.pdf")),
    ]);
    let body = template.substitute(&values)?;
    Ok(Self { base_name, tags, body })
  }

  /// The note's file name, `{base_name}.md`.
  pub fn file_name(&self) -> String { format!("{}.md", self.base_name) }

  /// Writes the note into `output_dir` and returns the new file's path.
  ///
  /// # Errors
  ///
  /// - [`PapernoteError::AlreadyExists`] if the file is already there; it is left untouched
  /// - [`PapernoteError::Io`] for any other failure, including a missing `output_dir`
  pub async fn write_to(&self, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = output_dir.as_ref().join(self.file_name());
    let mut file =
      match tokio::fs::OpenOptions::new().write(true).create_new(true).open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
          return Err(PapernoteError::AlreadyExists(path));
        },
        Err(e) => return Err(e.into()),
      };
    file.write_all(self.body.as_bytes()).await?;
    file.flush().await?;
    debug!("Wrote {} bytes to {}", self.body.len(), path.display());
    Ok(path)
  }
}

/// `{first author family}{year}_{journal}`.
pub fn base_name(record: &Record) -> Result<String> {
  let first = record.first_author()?;
  Ok(format!("{}{}_{}", first.family, record.year, record.journal))
}

/// The tag block: one year tag, one journal tag, then one tag per author.
///
/// ```text
/// - #Y/2021
/// - #J/arxiv
/// - #A/Doe_Jane
/// ```
pub fn tag_block(record: &Record) -> String {
  let mut lines = vec![format!("- #Y/{}", record.year), format!("- #J/{}", record.journal)];
  lines.extend(record.authors.iter().map(|author| format!("- #A/{author}")));
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record() -> Record {
    Record {
      title:         "A Study".into(),
      year:          2020,
      journal:       "PRB".into(),
      authors:       vec![Author::new("Smith", Some("J.")), Author::new("Doe", Some("Jane"))],
      abstract_text: "Text".into(),
      origin:        Origin::Crossref,
    }
  }

  #[test]
  fn test_base_name() {
    assert_eq!(base_name(&record()).unwrap(), "Smith2020_PRB");

    let mut unknown = record();
    unknown.year = record::UNKNOWN_YEAR;
    unknown.journal = record::UNKNOWN_JOURNAL.into();
    assert_eq!(base_name(&unknown).unwrap(), "Smith-1_unknown");
  }

  #[test]
  fn test_tag_block() {
    assert_eq!(tag_block(&record()), "- #Y/2020\n- #J/PRB\n- #A/Smith_J\n- #A/Doe_Jane");
  }

  #[test]
  fn test_compose() {
    let template = Template::new("# $title\n[[$name]] $DOI\n$tags\n\n$abstract");
    let note = Note::compose(&record(), "10.1103/PhysRevB.1.1", &template).unwrap();
    assert_eq!(note.base_name, "Smith2020_PRB");
    assert_eq!(note.file_name(), "Smith2020_PRB.md");
    assert_eq!(
      note.body,
      "# A Study\n[[Smith2020_PRB.pdf]] 10.1103/PhysRevB.1.1\n- #Y/2020\n- #J/PRB\n- #A/Smith_J\n- \
       #A/Doe_Jane\n\nText"
    );
  }

  #[test]
  fn test_compose_unknown_placeholder() {
    let template = Template::new("$title ($journal)");
    assert!(matches!(
      Note::compose(&record(), "10.1/x", &template),
      Err(PapernoteError::Template(_))
    ));
  }

  #[test]
  fn test_compose_without_authors() {
    let mut record = record();
    record.authors.clear();
    assert!(matches!(
      Note::compose(&record, "10.1/x", &Template::default()),
      Err(PapernoteError::Schema(_))
    ));
  }

  #[traced_test]
  #[tokio::test]
  async fn test_write_to() {
    let dir = tempdir().unwrap();
    let note = Note::compose(&record(), "10.1/x", &Template::default()).unwrap();
    let path = note.write_to(dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("Smith2020_PRB.md"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), note.body);
  }

  #[traced_test]
  #[tokio::test]
  async fn test_write_never_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Smith2020_PRB.md");
    std::fs::write(&path, "my own notes").unwrap();

    let note = Note::compose(&record(), "10.1/x", &Template::default()).unwrap();
    match note.write_to(dir.path()).await {
      Err(PapernoteError::AlreadyExists(existing)) => assert_eq!(existing, path),
      other => panic!("expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "my own notes");
  }

  #[traced_test]
  #[tokio::test]
  async fn test_write_to_missing_directory() {
    let dir = tempdir().unwrap();
    let note = Note::compose(&record(), "10.1/x", &Template::default()).unwrap();
    let result = note.write_to(dir.path().join("missing")).await;
    assert!(matches!(result, Err(PapernoteError::Io(_))));
  }
}

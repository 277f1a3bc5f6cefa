use super::*;

mod collisions;
mod registry;

#[traced_test]
#[test]
fn test_crossref_scenario() -> TestResult<()> {
  let raw = crossref_fixture()?;
  assert_eq!(raw.origin(), Origin::Crossref);

  let record = normalize(&raw)?;
  assert_eq!(record.title, "A Study");
  assert_eq!(record.year, 2020);
  assert_eq!(record.journal, "PRB");
  assert_eq!(record.abstract_text, "Text");
  assert_eq!(
    record.authors.iter().map(ToString::to_string).collect::<Vec<_>>(),
    ["Smith_J", "de-la-Cruz_Anne-Marie"]
  );

  assert_eq!(note::base_name(&record)?, "Smith2020_PRB");
  assert_eq!(
    note::tag_block(&record),
    "- #Y/2020\n- #J/PRB\n- #A/Smith_J\n- #A/de-la-Cruz_Anne-Marie"
  );
  Ok(())
}

#[traced_test]
#[test]
fn test_crossref_scenario_without_table_entry() -> TestResult<()> {
  let record = crossref_fixture()?.normalize(&JournalTable::empty())?;
  assert_eq!(record.journal, "PhysRevB");
  assert_eq!(note::base_name(&record)?, "Smith2020_PhysRevB");
  Ok(())
}

#[traced_test]
#[test]
fn test_arxiv_scenario() -> TestResult<()> {
  let raw = arxiv_fixture()?;
  assert_eq!(raw.origin(), Origin::Arxiv);

  let record = normalize(&raw)?;
  assert_eq!(record.title, "Paper");
  assert_eq!(record.year, 2021);
  assert_eq!(record.journal, "arxiv");
  assert_eq!(record.abstract_text, "Abstract text");
  assert_eq!(record.authors.iter().map(ToString::to_string).collect::<Vec<_>>(), ["Doe_Jane"]);

  assert_eq!(note::tag_block(&record), "- #Y/2021\n- #J/arxiv\n- #A/Doe_Jane");
  assert_eq!(note::base_name(&record)?, "Doe2021_arxiv");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_render_and_write_default_template() -> TestResult<()> {
  let identifier = "https://arxiv.org/abs/2105.00001";
  let record = normalize(&arxiv_fixture()?)?;
  let note = Note::compose(&record, identifier, &Template::default())?;

  let dir = tempdir()?;
  let path = note.write_to(dir.path()).await?;
  assert_eq!(path, dir.path().join("Doe2021_arxiv.md"));

  let written = fs::read_to_string(&path)?;
  assert!(written.contains("# Paper"));
  assert!(written.contains("[[Doe2021_arxiv.pdf]]"));
  assert!(written.contains(identifier));
  assert!(written.contains("- #Y/2021\n- #J/arxiv\n- #A/Doe_Jane"));
  assert!(written.contains("Abstract text"));
  assert!(!written.contains('$'));
  Ok(())
}

#[traced_test]
#[test]
fn test_configured_abbreviation_wins() -> TestResult<()> {
  let dir = tempdir()?;
  let template_path = dir.path().join("paper_template.md");
  fs::write(&template_path, "$title")?;

  let config = Config::default()
    .with_template_path(&template_path)
    .with_journal_abbreviation("Phys. Rev. B", "PhysRevB-short");
  let papernote = Papernote::new(config)?;

  let record = crossref_fixture()?.normalize(papernote.journals())?;
  assert_eq!(record.journal, "PhysRevB-short");

  let note = papernote.compose(&record, "10.1103/physrevb.101.045401")?;
  assert_eq!(note.body, "A Study");
  Ok(())
}

#[traced_test]
#[test]
fn test_missing_template_file() {
  let dir = tempdir().unwrap();
  let config = Config::default().with_template_path(dir.path().join("nope.md"));
  assert!(matches!(Papernote::new(config), Err(PapernoteError::Io(_))));
}

#[ignore = "requires network access"]
#[traced_test]
#[tokio::test]
async fn test_create_note_from_arxiv() -> TestResult<()> {
  let dir = tempdir()?;
  let papernote = Papernote::new(Config::default())?;
  let path = papernote.create_note("https://arxiv.org/abs/2301.07041", None, dir.path()).await?;
  assert!(path.exists());
  assert!(fs::read_to_string(path)?.contains("Verifiable Fully Homomorphic Encryption"));
  Ok(())
}

use super::*;

#[traced_test]
#[tokio::test]
async fn test_second_write_fails_and_keeps_first() -> TestResult<()> {
  let dir = tempdir()?;
  let record = normalize(&crossref_fixture()?)?;

  let first = Note::compose(&record, "10.1103/physrevb.101.045401", &Template::new("first $title"))?;
  let path = first.write_to(dir.path()).await?;

  let second = Note::compose(&record, "10.1103/physrevb.101.045401", &Template::new("second $title"))?;
  match second.write_to(dir.path()).await {
    Err(PapernoteError::AlreadyExists(existing)) => assert_eq!(existing, path),
    other => panic!("expected AlreadyExists, got {other:?}"),
  }

  assert_eq!(fs::read_to_string(&path)?, "first A Study");
  assert_eq!(fs::read_dir(dir.path())?.count(), 1);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_same_name_from_different_sources_collides() -> TestResult<()> {
  let dir = tempdir()?;
  let mut record = normalize(&arxiv_fixture()?)?;
  Note::compose(&record, "https://arxiv.org/abs/2105.00001", &Template::default())?
    .write_to(dir.path())
    .await?;

  // A journal version by the same author and year, recorded under the same journal name.
  record.title = "Paper, revised".to_string();
  let result = Note::compose(&record, "10.1000/example", &Template::default())?
    .write_to(dir.path())
    .await;
  assert!(matches!(result, Err(PapernoteError::AlreadyExists(_))));
  Ok(())
}

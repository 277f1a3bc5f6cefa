use super::*;

const DOI: &str = "https://doi.org/10.1103/physrevb.101.045401";

#[traced_test]
#[tokio::test]
async fn test_registry_not_found_is_fetch_error() -> TestResult<()> {
  let addr = serve("404 Not Found", "Resource not found.".to_string()).await?;
  let retriever = Retriever::new(&local_registry(addr))?;

  let result = retriever.fetch(DOI, Origin::Crossref).await;
  assert!(matches!(result, Err(PapernoteError::Fetch(_))), "{result:?}");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_arxiv_server_error_is_fetch_error() -> TestResult<()> {
  let addr = serve("503 Service Unavailable", String::new()).await?;
  let retriever = Retriever::new(&Config::default())?;

  let result = retriever.fetch(&format!("http://{addr}/abs/2105.00001"), Origin::Arxiv).await;
  assert!(matches!(result, Err(PapernoteError::Fetch(_))), "{result:?}");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_registry_status_failed_is_schema_error() -> TestResult<()> {
  let body = r#"{"status":"failed","message":"Resource not found."}"#.to_string();
  let addr = serve("200 OK", body).await?;
  let retriever = Retriever::new(&local_registry(addr))?;

  match retriever.fetch(DOI, Origin::Crossref).await {
    Err(PapernoteError::Schema(message)) => assert!(message.contains("failed"), "{message}"),
    other => panic!("expected a schema error, got {other:?}"),
  }
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_registry_plain_text_body_is_json_error() -> TestResult<()> {
  let addr = serve("200 OK", "Resource not found.".to_string()).await?;
  let retriever = Retriever::new(&local_registry(addr))?;

  let result = retriever.fetch(DOI, Origin::Crossref).await;
  assert!(matches!(result, Err(PapernoteError::Json(_))), "{result:?}");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_create_note_from_registry() -> TestResult<()> {
  let addr = serve("200 OK", fs::read_to_string("tests/data/crossref_work.json")?).await?;
  let dir = tempdir()?;
  let papernote =
    Papernote::new(local_registry(addr))?.with_template(Template::new("# $title\n$tags\n[[$name]]"));

  let path = papernote.create_note(DOI, None, dir.path()).await?;
  assert_eq!(path, dir.path().join("Smith2020_PRB.md"));
  let written = fs::read_to_string(&path)?;
  assert_eq!(
    written,
    "# A Study\n- #Y/2020\n- #J/PRB\n- #A/Smith_J\n- #A/de-la-Cruz_Anne-Marie\n[[Smith2020_PRB.pdf]]"
  );

  match papernote.create_note(DOI, None, dir.path()).await {
    Err(PapernoteError::AlreadyExists(existing)) => assert_eq!(existing, path),
    other => panic!("expected AlreadyExists, got {other:?}"),
  }
  assert_eq!(fs::read_to_string(&path)?, written);
  assert_eq!(fs::read_dir(dir.path())?.count(), 1);
  Ok(())
}

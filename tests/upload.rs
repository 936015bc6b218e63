//! Integration tests for the upload-and-summarize flow.
//!
//! The summarization service is replaced by an `httpmock` server, so every
//! test runs offline and asserts both sides of the contract: what the client
//! puts on the wire (multipart field `document`, filename, declared type)
//! and how it reacts to each response shape.

use docsum::{
    select_document, summarize, summarize_to_file, DocSumError, Session, SummaryClient,
    SummaryVariant, UploadConfig,
};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents).unwrap();
    path
}

fn config_for(server: &MockServer) -> UploadConfig {
    UploadConfig::builder()
        .base_url(server.base_url())
        .build()
        .unwrap()
}

fn summary_body() -> serde_json::Value {
    json!({
        "summary": { "short": "Brief", "medium": "Mid", "long": "Full text" },
        "type": "pdf"
    })
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn upload_sends_multipart_document_field() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/upload")
                .body_contains("name=\"document\"")
                .body_contains("filename=\"report.pdf\"")
                .body_contains("application/pdf");
            then.status(200).json_body(summary_body());
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.pdf", b"%PDF-1.4 pretend content");

    let summary = summarize(&path, &config_for(&server)).await.unwrap();
    assert_eq!(summary.variant(SummaryVariant::Short), "Brief");
    mock.assert_async().await;
}

#[tokio::test]
async fn filename_spaces_are_normalised_on_the_wire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/upload")
                .body_contains("filename=\"my_report_final.pdf\"");
            then.status(200).json_body(summary_body());
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "my report final.pdf", b"%PDF-1.4");

    summarize(&path, &config_for(&server)).await.unwrap();
    mock.assert_async().await;
}

// ── The report.pdf scenario ──────────────────────────────────────────────────

#[tokio::test]
async fn session_displays_brief_then_full_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(summary_body());
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.pdf", &vec![0u8; 2 * 1024 * 1024]);
    let config = config_for(&server);

    let mut session = Session::new();
    session.select(select_document(&path, &config));
    assert!(session.error().is_none());

    let (document, ticket) = session.begin_upload().unwrap();
    assert!(session.is_uploading());

    let client = SummaryClient::new(&config).unwrap();
    let outcome = client.upload(document).await;
    session.finish_upload(ticket, outcome);

    assert_eq!(session.displayed_text(), Some("Brief"));
    session.set_variant(SummaryVariant::Long);
    assert_eq!(session.displayed_text(), Some("Full text"));
}

// ── Response-shape handling ──────────────────────────────────────────────────

#[tokio::test]
async fn body_without_summary_field_is_no_summary() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200)
                .json_body(json!({ "error": "Unable to extract text from the file." }));
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "scan.png", b"\x89PNG fake");

    let err = summarize(&path, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, DocSumError::NoSummary));
}

#[tokio::test]
async fn empty_summary_object_is_no_summary() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(json!({ "summary": {} }));
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "scan.jpg", b"\xff\xd8 fake jpeg");

    let err = summarize(&path, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, DocSumError::NoSummary));
}

#[tokio::test]
async fn non_json_body_is_no_summary() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).body("<html>proxy page</html>");
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "doc.pdf", b"%PDF-1.4");

    let err = summarize(&path, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, DocSumError::NoSummary));
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(500)
                .json_body(json!({ "error": "An error occurred: boom" }));
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "doc.pdf", b"%PDF-1.4");

    let err = summarize(&path, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, DocSumError::ServerStatus { status: 500 }));
}

// ── No network I/O before validation passes ──────────────────────────────────

#[tokio::test]
async fn invalid_selection_never_hits_the_network() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(summary_body());
        })
        .await;

    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", b"plain text");
    let config = config_for(&server);

    let mut session = Session::new();
    session.select(select_document(&path, &config));
    assert!(session.error().is_some());
    assert!(matches!(
        session.begin_upload().unwrap_err(),
        DocSumError::NoDocumentSelected
    ));

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn oversized_file_is_rejected_without_upload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(summary_body());
        })
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server);
    let limit = config.max_document_bytes;

    // One byte over the 5 MiB cap: rejected at selection.
    let over = write_file(&dir, "over.pdf", &vec![0u8; (limit + 1) as usize]);
    let err = select_document(&over, &config).unwrap_err();
    assert!(matches!(err, DocSumError::FileTooLarge { .. }));
    assert_eq!(mock.hits_async().await, 0);

    // Exactly at the cap: accepted and uploaded (strict `>` policy).
    let exact = write_file(&dir, "exact.pdf", &vec![0u8; limit as usize]);
    let summary = summarize(&exact, &config).await.unwrap();
    assert_eq!(summary.variant(SummaryVariant::Medium), "Mid");
    assert_eq!(mock.hits_async().await, 1);
}

// ── Recovery after failure ───────────────────────────────────────────────────

#[tokio::test]
async fn transport_failure_leaves_session_usable() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "doc.pdf", b"%PDF-1.4");

    // Nothing listens on port 1; the request fails at connect time.
    let dead_config = UploadConfig::builder()
        .base_url("http://127.0.0.1:1")
        .upload_timeout_secs(5)
        .build()
        .unwrap();

    let mut session = Session::new();
    session.select(select_document(&path, &dead_config));
    let (document, ticket) = session.begin_upload().unwrap();

    let client = SummaryClient::new(&dead_config).unwrap();
    let outcome = client.upload(document).await;
    assert!(matches!(outcome, Err(DocSumError::UploadFailed { .. })));
    session.finish_upload(ticket, outcome);

    assert!(!session.is_uploading());
    assert!(session.error().is_some());
    assert!(session.can_upload());

    // A subsequent upload against a live server succeeds.
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(summary_body());
        })
        .await;

    let live_config = config_for(&server);
    let (document, ticket) = session.begin_upload().unwrap();
    assert!(session.error().is_none());
    let client = SummaryClient::new(&live_config).unwrap();
    session.finish_upload(ticket, client.upload(document).await);

    assert_eq!(session.displayed_text(), Some("Brief"));
}

// ── File output ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn summarize_to_file_writes_chosen_variant() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(summary_body());
        })
        .await;

    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "report.pdf", b"%PDF-1.4");
    let output = dir.path().join("out").join("summary.txt");

    let summary = summarize_to_file(&input, &output, SummaryVariant::Medium, &config_for(&server))
        .await
        .unwrap();

    assert_eq!(summary.variant(SummaryVariant::Long), "Full text");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Mid");
    // No leftover temp file from the atomic write.
    assert!(!output.with_extension("txt.tmp").exists());
}

//! Upload API tests.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::{FailingRecognizer, PanickingRecognizer, TestContext};

/// Test a text upload is recognized and its pairs extracted.
#[tokio::test]
async fn test_upload_text_file() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let notes = fixtures::sample_notes(3);

    let response = server
        .post("/api/upload")
        .multipart(fixtures::text_file_form("biology.txt", &notes))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["filename"], "biology.txt");
    assert_eq!(body["file_size"], notes.len());
    assert_eq!(body["extracted_text"], notes);
    assert_eq!(body["total_flashcards"], 3);
    assert_eq!(body["flashcards"][0]["question"], "Question 1?");
    assert_eq!(body["semantic_fallback"], false);
}

/// Test semantic upload returns the semantic shape.
#[tokio::test]
async fn test_upload_semantic() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/upload/semantic")
        .multipart(fixtures::text_file_form("history.txt", fixtures::FACTUAL_PROSE))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["filename"], "history.txt");
    assert_eq!(body["total_semantic_flashcards"], 2);
    assert_eq!(body["semantic_flashcards"][0]["answer"], "1945");
    assert!(body.get("flashcards").is_none());
}

/// Test other form fields are skipped while looking for the file.
#[tokio::test]
async fn test_upload_ignores_other_fields() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let form = fixtures::text_file_form("notes.txt", "Q: Capital of Peru?\nA: Lima")
        .add_text("deck", "geography");

    let response = server.post("/api/upload").multipart(form).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["flashcards"][0]["answer"], "Lima");
}

/// Test a form without a file field is rejected.
#[tokio::test]
async fn test_upload_missing_file() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let form = MultipartForm::new().add_text("deck", "geography");

    let response = server.post("/api/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Bad request: No file provided");
}

/// Test content types the recognizer cannot read are rejected.
#[tokio::test]
async fn test_upload_unsupported_type() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/upload")
        .multipart(fixtures::file_form("page.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "unsupported_media_type");
}

/// Test an empty file is rejected.
#[tokio::test]
async fn test_upload_empty_file() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/upload")
        .multipart(fixtures::text_file_form("empty.txt", ""))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Bad request: Uploaded file is empty");
}

/// Test files over the configured limit are rejected.
#[tokio::test]
async fn test_upload_too_large() {
    let ctx = TestContext::with_upload_limit(16);
    let server = ctx.server();

    let response = server
        .post("/api/upload")
        .multipart(fixtures::text_file_form("long.txt", &fixtures::sample_notes(5)))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "payload_too_large");
}

/// Test text that is not UTF-8 is reported as invalid input.
#[tokio::test]
async fn test_upload_invalid_utf8() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/upload")
        .multipart(fixtures::file_form("broken.txt", "text/plain", vec![0x51, 0x3a, 0xff, 0xfe]))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid_input");
}

/// Test recognizer failures surface as server errors.
#[tokio::test]
async fn test_upload_recognizer_failure() {
    let ctx = TestContext::with_recognizer(Arc::new(FailingRecognizer));
    let server = ctx.server();

    let health: serde_json::Value = server.get("/health").await.json();
    assert_eq!(health["recognizer"], "failing");

    let response = server
        .post("/api/upload")
        .multipart(fixtures::file_form("page.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "recognition_error");
    assert_eq!(body["message"], "Recognition failed: engine offline");
}

/// Test a crashed recognizer task is reported as an internal error.
#[tokio::test]
async fn test_upload_recognizer_crash() {
    let ctx = TestContext::with_recognizer(Arc::new(PanickingRecognizer));
    let server = ctx.server();

    let response = server
        .post("/api/upload/semantic")
        .multipart(fixtures::file_form("page.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "internal_error");
}

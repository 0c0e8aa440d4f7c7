//! Upload endpoints: recognize a file, then extract flashcards from its text

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{ExtractResponse, SemanticExtractResponse};
use crate::AppState;

const FILE_FIELD: &str = "file";

/// A validated file taken from the multipart body.
struct Upload {
    filename: String,
    bytes: Bytes,
}

/// POST /api/upload
/// Recognize an uploaded file and extract flashcards from it
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>> {
    let upload = read_upload(&state, multipart).await?;
    let file_size = upload.bytes.len();
    let text = recognize(&state, upload.bytes).await?;

    let result = notes_core::extract_flashcards_with(&text, &state.cues);
    tracing::info!(
        "Processed {} ({} bytes): {} flashcards (semantic fallback: {})",
        upload.filename,
        file_size,
        result.flashcards.len(),
        result.semantic_fallback
    );

    Ok(Json(
        ExtractResponse::new(result).with_file(upload.filename, file_size),
    ))
}

/// POST /api/upload/semantic
/// Recognize an uploaded file and infer flashcards from its prose
pub async fn upload_semantic(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SemanticExtractResponse>> {
    let upload = read_upload(&state, multipart).await?;
    let file_size = upload.bytes.len();
    let text = recognize(&state, upload.bytes).await?;

    let result = notes_core::extract_semantic_flashcards_with(&text, &state.cues);
    tracing::info!(
        "Processed {} ({} bytes): {} semantic flashcards",
        upload.filename,
        file_size,
        result.flashcards.len()
    );

    Ok(Json(
        SemanticExtractResponse::new(result).with_file(upload.filename, file_size),
    ))
}

/// Find the `file` field and check it before recognition.
async fn read_upload(state: &AppState, mut multipart: Multipart) -> Result<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        if !state.recognizer.accepts(&content_type) {
            tracing::warn!("Rejected {}: unsupported content type {}", filename, content_type);
            return Err(ApiError::UnsupportedMediaType(format!(
                "{} cannot be read by {}",
                content_type,
                state.recognizer.name()
            )));
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            tracing::warn!("Rejected {}: empty file", filename);
            return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
        }

        let limit = state.config.max_upload_bytes;
        if bytes.len() > limit {
            tracing::warn!("Rejected {}: {} bytes exceeds {}", filename, bytes.len(), limit);
            return Err(ApiError::PayloadTooLarge(format!(
                "file is {} bytes, limit is {}",
                bytes.len(),
                limit
            )));
        }

        return Ok(Upload { filename, bytes });
    }

    tracing::warn!("Rejected upload without a file field");
    Err(ApiError::BadRequest("No file provided".to_string()))
}

/// Run the recognizer off the async runtime.
async fn recognize(state: &AppState, bytes: Bytes) -> Result<String> {
    let recognizer = state.recognizer.clone();
    tokio::task::spawn_blocking(move || recognizer.recognize(&bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("recognizer task failed: {}", e)))?
}

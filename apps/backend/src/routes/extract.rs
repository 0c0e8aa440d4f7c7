//! Text extraction endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{ExtractResponse, SemanticExtractResponse, TextRequest};
use crate::AppState;

/// POST /api/extract
/// Extract flashcards from already-recognized text
pub async fn extract(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<ExtractResponse>> {
    let result = notes_core::extract_flashcards_with(&payload.text, &state.cues);

    tracing::info!(
        "Extracted {} flashcards from {} bytes of text (semantic fallback: {})",
        result.flashcards.len(),
        payload.text.len(),
        result.semantic_fallback
    );

    Ok(Json(ExtractResponse::new(result)))
}

/// POST /api/extract/semantic
/// Infer flashcards from prose, ignoring Q/A markup
pub async fn extract_semantic(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<SemanticExtractResponse>> {
    let result = notes_core::extract_semantic_flashcards_with(&payload.text, &state.cues);

    tracing::info!(
        "Extracted {} semantic flashcards from {} bytes of text",
        result.flashcards.len(),
        payload.text.len()
    );

    Ok(Json(SemanticExtractResponse::new(result)))
}

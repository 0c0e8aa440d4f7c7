//! Question generation endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{GenerateQuestionsResponse, TextRequest};
use crate::AppState;

/// POST /api/generate-questions
/// Generate typed study questions from prose
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<GenerateQuestionsResponse>> {
    if payload.text.trim().is_empty() {
        tracing::warn!("Rejected question generation request without text");
        return Err(ApiError::BadRequest("No text provided".to_string()));
    }

    let questions = notes_core::generate_questions_with(&payload.text, &state.cues);
    tracing::info!("Generated {} questions", questions.len());

    Ok(Json(GenerateQuestionsResponse { questions }))
}

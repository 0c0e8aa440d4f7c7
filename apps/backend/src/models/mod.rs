//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from notes-core
pub use notes_core::types::{CardFormat, FlashCard, GeneratedQuestion, QuestionType};

// === Request Types ===

/// Body of the text endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

// === Response Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub recognizer: String,
    pub max_upload_bytes: usize,
    pub supported_content_types: Vec<String>,
}

/// Flashcards found by markup matching, or by the semantic fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub extracted_text: String,
    pub flashcards: Vec<FlashCard>,
    pub total_flashcards: usize,
    pub semantic_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<usize>,
}

/// Flashcards inferred from prose only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticExtractResponse {
    pub extracted_text: String,
    pub semantic_flashcards: Vec<FlashCard>,
    pub total_semantic_flashcards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<GeneratedQuestion>,
}

impl ExtractResponse {
    pub fn new(result: notes_core::ExtractionResult) -> Self {
        Self {
            total_flashcards: result.flashcards.len(),
            extracted_text: result.raw_text,
            flashcards: result.flashcards,
            semantic_fallback: result.semantic_fallback,
            filename: None,
            file_size: None,
        }
    }

    pub fn with_file(mut self, filename: String, file_size: usize) -> Self {
        self.filename = Some(filename);
        self.file_size = Some(file_size);
        self
    }
}

impl SemanticExtractResponse {
    pub fn new(result: notes_core::ExtractionResult) -> Self {
        Self {
            total_semantic_flashcards: result.flashcards.len(),
            extracted_text: result.raw_text,
            semantic_flashcards: result.flashcards,
            filename: None,
            file_size: None,
        }
    }

    pub fn with_file(mut self, filename: String, file_size: usize) -> Self {
        self.filename = Some(filename);
        self.file_size = Some(file_size);
        self
    }
}

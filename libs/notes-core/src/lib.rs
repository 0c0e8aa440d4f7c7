//! Core extraction library shared by the backend service.
//!
//! Provides:
//! - Line normalization for recognized (often noisy) text
//! - Pattern matching for five explicit Q/A markup formats
//! - Semantic fallback that turns factual prose into flashcards
//! - Question generation classified as basic, intermediate, advanced or math
//! - Configurable cue lists driving the heuristic stages

pub mod config;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod rewrite;
pub mod semantic;
pub mod sentence;
pub mod types;

pub use config::CueConfig;
pub use error::{ExtractError, Result};
pub use matcher::match_patterns;
pub use normalize::normalize;
pub use pipeline::{
    decode_text, extract_flashcards, extract_flashcards_with, extract_semantic_flashcards,
    extract_semantic_flashcards_with, generate_questions, generate_questions_with,
};
pub use semantic::extract_semantic;
pub use types::{
    CardFormat, ExtractionResult, FlashCard, GeneratedQuestion, NormalizedLine, QuestionType,
};

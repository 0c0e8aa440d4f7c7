//! Public entry points: normalize, match, fall back, package.

use tracing::debug;

use crate::config::CueConfig;
use crate::error::{ExtractError, Result};
use crate::generator::generate;
use crate::matcher::match_patterns;
use crate::normalize::normalize;
use crate::semantic::extract_semantic;
use crate::sentence::split_sentences;
use crate::types::{ExtractionResult, GeneratedQuestion, QuestionType};

/// Extract flashcards using the default cue lists.
pub fn extract_flashcards(text: &str) -> ExtractionResult {
    extract_flashcards_with(text, &CueConfig::default())
}

/// Extract flashcards from recognized text.
///
/// Explicit Q/A markup always wins. Only when the pattern matcher finds
/// nothing and the text holds several sentences is the semantic extractor
/// consulted. Never fails: unusable input yields an empty card list.
pub fn extract_flashcards_with(text: &str, cues: &CueConfig) -> ExtractionResult {
    let lines = normalize(text);
    let mut flashcards = match_patterns(&lines, cues);
    debug!(
        lines = lines.len(),
        cards = flashcards.len(),
        formats = ?flashcards.iter().map(|c| c.format.as_str()).collect::<Vec<_>>(),
        "pattern matching finished"
    );

    let mut semantic_fallback = false;
    if flashcards.is_empty() {
        let sentences = split_sentences(&lines, cues).len();
        if sentences >= cues.min_sentences_for_fallback {
            flashcards = extract_semantic(&lines, cues);
            semantic_fallback = true;
            debug!(sentences, cards = flashcards.len(), "semantic fallback used");
        }
    }

    ExtractionResult {
        raw_text: text.to_string(),
        flashcards,
        semantic_fallback,
    }
}

/// Run the semantic extractor regardless of how much markup was found.
pub fn extract_semantic_flashcards(text: &str) -> ExtractionResult {
    extract_semantic_flashcards_with(text, &CueConfig::default())
}

pub fn extract_semantic_flashcards_with(text: &str, cues: &CueConfig) -> ExtractionResult {
    let lines = normalize(text);
    let flashcards = extract_semantic(&lines, cues);
    let inferred = flashcards.iter().filter(|c| c.format.is_semantic()).count();
    debug!(
        lines = lines.len(),
        cards = flashcards.len(),
        inferred,
        "semantic extraction finished"
    );

    ExtractionResult {
        raw_text: text.to_string(),
        flashcards,
        semantic_fallback: true,
    }
}

/// Generate typed study questions using the default cue lists.
pub fn generate_questions(text: &str) -> Vec<GeneratedQuestion> {
    generate_questions_with(text, &CueConfig::default())
}

pub fn generate_questions_with(text: &str, cues: &CueConfig) -> Vec<GeneratedQuestion> {
    let questions = generate(&normalize(text), cues);

    let count = |t: QuestionType| questions.iter().filter(|q| q.question_type == t).count();
    debug!(
        total = questions.len(),
        basic = count(QuestionType::Basic),
        intermediate = count(QuestionType::Intermediate),
        advanced = count(QuestionType::Advanced),
        math = count(QuestionType::Math),
        "questions generated"
    );

    questions
}

/// Decode recognizer output into text.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::InvalidInput {
        reason: format!("text is not valid UTF-8 ({})", e.utf8_error()),
    })
}

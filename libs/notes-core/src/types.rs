//! Core types produced by the extraction pipeline.
//!
//! All records are request-scoped: they are built fresh for every call and
//! never mutated after being returned.

use serde::{Deserialize, Serialize};

/// One logical line after cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedLine {
    /// 0-based position in the cleaned sequence.
    pub index: usize,
    pub text: String,
}

impl NormalizedLine {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Which convention produced a flashcard.
///
/// The first five are explicit markup formats recognized by the pattern
/// matcher, in priority order. The rest tag cards inferred from prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFormat {
    /// `Q:` / `A:`
    Qa,
    /// `Question:` / `Answer:`
    QuestionAnswer,
    /// `Q1:` / `A1:`
    NumberedQa,
    /// `1. question` followed by an unmarked answer line.
    NumberedList,
    /// A line ending in `?` followed by an unmarked answer line.
    QuestionMark,
    Definition,
    Date,
    Quantity,
    Entity,
}

impl CardFormat {
    /// Get the format tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qa => "qa",
            Self::QuestionAnswer => "question_answer",
            Self::NumberedQa => "numbered_qa",
            Self::NumberedList => "numbered_list",
            Self::QuestionMark => "question_mark",
            Self::Definition => "definition",
            Self::Date => "date",
            Self::Quantity => "quantity",
            Self::Entity => "entity",
        }
    }

    /// Whether the card was inferred from prose rather than explicit markup.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            Self::Definition | Self::Date | Self::Quantity | Self::Entity
        )
    }
}

/// A question/answer pair surfaced for study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCard {
    pub question: String,
    pub answer: String,
    pub format: CardFormat,
    /// Index of the question's NormalizedLine.
    pub source_line: usize,
}

impl FlashCard {
    /// Build a card, trimming both sides.
    ///
    /// Returns `None` when either side is empty after trimming.
    pub fn new(
        question: &str,
        answer: &str,
        format: CardFormat,
        source_line: usize,
    ) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            format,
            source_line,
        })
    }
}

/// Output of `extract_flashcards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub raw_text: String,
    /// Cards in top-to-bottom discovery order. Not deduplicated.
    pub flashcards: Vec<FlashCard>,
    /// Whether the cards came from the semantic fallback.
    pub semantic_fallback: bool,
}

/// Difficulty / subject bucket of a generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Basic,
    Intermediate,
    Advanced,
    Math,
}

impl QuestionType {
    /// Get the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Math => "math",
        }
    }
}

/// A newly authored study prompt. No answer is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

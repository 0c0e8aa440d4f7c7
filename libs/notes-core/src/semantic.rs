//! Semantic extractor: flashcards from prose without explicit Q/A markup.
//!
//! Three sources are used, in order:
//! - Explicit Q/A markup, through the pattern matcher.
//! - Unclaimed `Term: definition` lines become "What is Term?" cards.
//! - Every other declarative sentence is handed to the rewrite rules, which
//!   swap a date, number or named entity for an interrogative.
//!
//! Dangling markers (a `Q:` with no answer) never become cards. Sentences
//! with nothing to swap are skipped; this stage never fails.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::CueConfig;
use crate::matcher::{is_answer_marker, is_question_like, match_with_remainder, strip_markers};
use crate::rewrite;
use crate::sentence::split_sentences;
use crate::types::{CardFormat, FlashCard, NormalizedLine};

static TERM_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]{1,60}?)\s*:\s+(.+)$").expect("valid regex"));

const MAX_TERM_WORDS: usize = 5;

/// Derive flashcards from the lines' prose.
pub fn extract_semantic(lines: &[NormalizedLine], cues: &CueConfig) -> Vec<FlashCard> {
    let (mut cards, unclaimed) = match_with_remainder(lines, cues);
    let mut prose = Vec::new();

    for line in unclaimed {
        if is_question_like(&line.text) || is_answer_marker(&line.text) {
            let text = strip_markers(&line.text).to_string();
            prose.push(NormalizedLine::new(line.index, text));
            continue;
        }
        match term_definition(&line) {
            Some(card) => cards.push(card),
            None => prose.push(line),
        }
    }

    for sentence in split_sentences(&prose, cues) {
        if sentence.is_interrogative() {
            continue;
        }
        let words = sentence.words();
        if let Some(r) = rewrite::infer(&words, cues) {
            if let Some(card) = FlashCard::new(&r.question, &r.answer, r.format, sentence.line) {
                cards.push(card);
            }
        }
    }

    cards.sort_by_key(|c| c.source_line);
    dedup(cards)
}

/// `Term: definition` with a short term.
fn term_definition(line: &NormalizedLine) -> Option<FlashCard> {
    let caps = TERM_DEFINITION.captures(&line.text)?;
    let term = caps.get(1)?.as_str().trim();
    let definition = caps.get(2)?.as_str().trim();

    let word_count = term.split_whitespace().count();
    if word_count == 0 || word_count > MAX_TERM_WORDS {
        return None;
    }
    // Numbered labels ("1: ...") are not terms.
    if term.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    FlashCard::new(
        &format!("What is {}?", term),
        definition,
        CardFormat::Definition,
        line.index,
    )
}

/// Drop repeated cards, comparing question and answer case-insensitively.
fn dedup(cards: Vec<FlashCard>) -> Vec<FlashCard> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|c| seen.insert((c.question.to_lowercase(), c.answer.to_lowercase())))
        .collect()
}

//! Sentence segmentation and word-level helpers shared by the heuristic stages.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CueConfig;
use crate::types::NormalizedLine;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+(?:\.\d+)?$|^\d+(?:\.\d+)?$").expect("valid regex"));

/// A sentence plus the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    /// Index of the NormalizedLine the sentence starts on.
    pub line: usize,
}

impl Sentence {
    /// Whether the sentence asks rather than states.
    pub fn is_interrogative(&self) -> bool {
        self.text.ends_with('?')
    }

    /// Words of the sentence without its terminal punctuation.
    pub fn words(&self) -> Vec<&str> {
        body(&self.text).split_whitespace().collect()
    }
}

/// Split lines into sentences.
///
/// Sentences may span line breaks. A `.`, `!` or `?` ends a sentence unless
/// it closes an abbreviation or an initial, or the next word starts in
/// lowercase.
pub fn split_sentences(lines: &[NormalizedLine], cues: &CueConfig) -> Vec<Sentence> {
    let words: Vec<(usize, &str)> = lines
        .iter()
        .flat_map(|line| line.text.split_whitespace().map(move |w| (line.index, w)))
        .collect();

    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut start_line = 0;

    for (i, (line, word)) in words.iter().enumerate() {
        if current.is_empty() {
            start_line = *line;
        }
        current.push(word);

        let next = words.get(i + 1).map(|(_, w)| *w);
        if ends_sentence(word, next, cues) {
            sentences.push(Sentence {
                text: current.join(" "),
                line: start_line,
            });
            current.clear();
        }
    }

    if !current.is_empty() {
        sentences.push(Sentence {
            text: current.join(" "),
            line: start_line,
        });
    }

    sentences
}

fn ends_sentence(word: &str, next: Option<&str>, cues: &CueConfig) -> bool {
    let stripped = word.trim_end_matches(['"', '\'', ')', ']', '\u{201D}']);
    let Some(last) = stripped.chars().last() else {
        return false;
    };
    if !matches!(last, '.' | '!' | '?') {
        return false;
    }

    if let Some(next) = next {
        if next.chars().next().is_some_and(|c| c.is_lowercase()) {
            return false;
        }
    }

    if last == '.' {
        let stem = stripped.trim_end_matches('.');
        let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
        if cues.is_abbreviation(stem) {
            return false;
        }
        if cues.is_numbering_abbreviation(stem) && next.is_some_and(is_number) {
            return false;
        }
        let mut chars = stem.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphabetic() {
                return false;
            }
        }
    }

    true
}

/// Strip terminal punctuation from a sentence.
pub fn body(text: &str) -> &str {
    text.trim()
        .trim_end_matches(['.', '!', '?', ';', ':'])
        .trim_end()
}

/// Trim punctuation from both ends of a word.
pub fn clean(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Lowercased, punctuation-free form of a word.
pub fn key(word: &str) -> String {
    clean(word).to_lowercase()
}

/// Whether a word is a number such as `42`, `3.14` or `299,792,458`.
pub fn is_number(word: &str) -> bool {
    NUMBER.is_match(clean(word))
}

pub fn is_capitalized(word: &str) -> bool {
    clean(word).chars().next().is_some_and(|c| c.is_uppercase())
}

/// Position of a (possibly multi-word) phrase in a word list.
pub fn find_phrase(words: &[&str], phrase: &str) -> Option<usize> {
    let parts: Vec<&str> = phrase.split_whitespace().collect();
    if parts.is_empty() || parts.len() > words.len() {
        return None;
    }
    (0..=words.len() - parts.len()).find(|&i| {
        parts
            .iter()
            .zip(&words[i..])
            .all(|(p, w)| clean(w).eq_ignore_ascii_case(p))
    })
}

/// First phrase from `phrases` found in `words`, with its position and length.
pub fn find_any(words: &[&str], phrases: &[String]) -> Option<(usize, usize)> {
    phrases
        .iter()
        .filter_map(|p| find_phrase(words, p).map(|i| (i, p.split_whitespace().count())))
        .min_by_key(|(i, _)| *i)
}

/// Join words, dropping a dangling comma at the end.
pub fn join(words: &[&str]) -> String {
    words
        .join(" ")
        .trim_end_matches([',', ';', ':'])
        .trim()
        .to_string()
}

/// Lowercase a leading function word so a clause reads mid-sentence.
///
/// Proper nouns cannot be told apart from ordinary capitalized words, so
/// only stopwords ("The", "It", ...) are lowered.
pub fn lower_leading(text: &str, cues: &CueConfig) -> String {
    let Some(first) = text.split_whitespace().next() else {
        return String::new();
    };
    if !cues.is_stopword(clean(first)) {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize the first letter and end with a question mark.
pub fn as_question(text: &str) -> String {
    let text = text.trim().trim_end_matches([',', ';', ':', '.']);
    let mut chars = text.chars();
    let mut out: String = match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => return String::new(),
    };
    if !out.ends_with('?') {
        out.push('?');
    }
    out
}

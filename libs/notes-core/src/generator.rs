//! Question generation and difficulty classification.
//!
//! Each sentence runs through a priority cascade and yields at most one
//! question:
//! 1. math - numbers with units, operators or quantitative words
//! 2. advanced - causal or conditional language
//! 3. intermediate - comparisons, or a term shared with the previous sentence
//! 4. basic - everything else that names something
//!
//! The stage functions are public so each can be exercised on its own.

use std::collections::HashSet;

use tracing::trace;

use crate::config::CueConfig;
use crate::rewrite::{self, focus, invert, is_dated_year};
use crate::sentence::{as_question, clean, find_any, find_phrase, is_number, join, key, lower_leading, split_sentences};
use crate::types::{GeneratedQuestion, NormalizedLine, QuestionType};

const MIN_WORDS: usize = 3;
const MIN_TERM_LEN: usize = 4;

/// Generate questions for every declarative sentence, in sentence order.
pub fn generate(lines: &[NormalizedLine], cues: &CueConfig) -> Vec<GeneratedQuestion> {
    let sentences: Vec<_> = split_sentences(lines, cues)
        .into_iter()
        .filter(|s| !s.is_interrogative())
        .collect();

    let mut questions = Vec::new();
    for (i, sentence) in sentences.iter().enumerate() {
        let words = sentence.words();
        let previous = i.checked_sub(1).map(|p| sentences[p].words());
        if let Some(q) = question_for(&words, previous.as_deref(), cues) {
            trace!(line = sentence.line, kind = q.question_type.as_str(), "classified sentence");
            questions.push(q);
        }
    }
    questions
}

/// Classify one sentence and write its question.
pub fn question_for(
    words: &[&str],
    previous: Option<&[&str]>,
    cues: &CueConfig,
) -> Option<GeneratedQuestion> {
    if words.len() < MIN_WORDS {
        return None;
    }

    let (text, question_type) = if let Some(q) = math_question(words, cues) {
        (q, QuestionType::Math)
    } else if let Some(q) = advanced_question(words, cues) {
        (q, QuestionType::Advanced)
    } else if let Some(q) = intermediate_question(words, previous, cues) {
        (q, QuestionType::Intermediate)
    } else {
        (basic_question(words, cues)?, QuestionType::Basic)
    };

    Some(GeneratedQuestion {
        text,
        question_type,
    })
}

/// Whether a sentence states a numeric relationship.
pub fn has_math_cue(words: &[&str], cues: &CueConfig) -> bool {
    // "in 1492" dates the sentence rather than measuring anything.
    let numbers: Vec<usize> = (0..words.len())
        .filter(|&i| is_number(words[i]) && !is_dated_year(words, i))
        .collect();
    if numbers.is_empty() {
        return false;
    }

    let unit_after_number = numbers.iter().any(|&i| {
        let w = words[i];
        w.ends_with('%')
            || words.get(i + 1).is_some_and(|next| cues.is_unit(clean(next)))
    });
    let operator = words
        .iter()
        .any(|w| w.chars().any(|c| cues.operator_chars.contains(&c)));
    let quantitative = find_any(words, &cues.quantitative_words).is_some();

    unit_after_number || operator || quantitative
}

/// Ask about the numeric relationship: "What is 2 + 2?", "... how many meters?".
pub fn math_question(words: &[&str], cues: &CueConfig) -> Option<String> {
    if !has_math_cue(words, cues) {
        return None;
    }

    let sentence = join(words);
    if let Some((lhs, _)) = sentence.split_once('=') {
        let lhs = lhs.trim();
        if lhs.chars().any(|c| c.is_ascii_digit()) {
            return Some(as_question(&format!("What is {}", lhs)));
        }
    }

    match rewrite::quantity(words, cues) {
        Some(r) => Some(r.question),
        None => Some(as_question(&format!("What quantity is described by: {}", sentence))),
    }
}

/// Why/how questions from causal or conditional cues.
pub fn advanced_question(words: &[&str], cues: &CueConfig) -> Option<String> {
    if let Some((j, len)) = find_any(words, &cues.effect_first_connectives) {
        // "since 1990" is about time, not cause.
        let temporal = key(words[j]) == "since" && words.get(j + len).is_some_and(|w| is_number(w));
        if !temporal {
            let effect = if j == 0 {
                comma_after(words, len).map(|c| &words[c + 1..])
            } else {
                Some(&words[..j])
            };
            if let Some(effect) = effect.filter(|e| !e.is_empty()) {
                return Some(why(effect, cues));
            }
        }
    }

    if let Some((j, len)) = find_any(words, &cues.causal_verbs) {
        if j > 0 && j + len < words.len() {
            return Some(as_question(&format!(
                "How does {} lead to {}",
                lower_leading(&join(&words[..j]), cues),
                join(&words[j + len..])
            )));
        }
    }

    if let Some((j, len)) = find_any(words, &cues.result_connectives) {
        let effect = &words[j + len..];
        if !effect.is_empty() {
            return Some(why(effect, cues));
        }
    }

    conditional(words, cues)
}

/// "If X, Y" or "Y unless X" -> "How does it follow that Y if X?".
fn conditional(words: &[&str], cues: &CueConfig) -> Option<String> {
    let (j, len) = find_any(words, &cues.conditional_markers)?;
    let marker = join(&words[j..j + len]).to_lowercase();

    let (condition, consequence) = if j == 0 {
        if let Some(c) = comma_after(words, len) {
            (&words[len..=c], &words[c + 1..])
        } else {
            let t = find_phrase(&words[len..], "then")?;
            (&words[len..len + t], &words[len + t + 1..])
        }
    } else {
        (&words[j + len..], &words[..j])
    };

    if condition.is_empty() || consequence.is_empty() {
        return None;
    }
    Some(as_question(&format!(
        "How does it follow that {} {} {}",
        lower_leading(&join(consequence), cues),
        marker,
        lower_leading(&join(condition), cues)
    )))
}

fn why(effect: &[&str], cues: &CueConfig) -> String {
    match invert(effect, cues) {
        Some(inverted) => as_question(&format!("Why {}", inverted)),
        None => as_question(&format!("Why is it that {}", lower_leading(&join(effect), cues))),
    }
}

/// Questions that connect two stated facts.
pub fn intermediate_question(
    words: &[&str],
    previous: Option<&[&str]>,
    cues: &CueConfig,
) -> Option<String> {
    comparison(words, cues).or_else(|| shared_term(words, previous?, cues))
}

/// "Jupiter is larger than Earth" -> "How do Jupiter and Earth compare?".
fn comparison(words: &[&str], cues: &CueConfig) -> Option<String> {
    let (j, len) = find_any(words, &cues.comparative_markers)?;
    let (left, right) = if j == 0 {
        // "Unlike X, Y ..."
        let c = comma_after(words, len)?;
        (&words[c + 1..], &words[len..=c])
    } else {
        (&words[..j], &words[j + len..])
    };

    let left = focus(left, cues)?;
    let right = focus(right, cues)?;
    if left.is_empty() || right.is_empty() || left.eq_ignore_ascii_case(&right) {
        return None;
    }
    Some(as_question(&format!("How do {} and {} compare", left, right)))
}

/// A term carried over from the previous sentence links the two facts.
fn shared_term(words: &[&str], previous: &[&str], cues: &CueConfig) -> Option<String> {
    let earlier: HashSet<String> = salient_terms(previous, cues).into_iter().collect();
    let current = salient_terms(words, cues);

    let shared = current.iter().find(|t| earlier.contains(*t))?;
    let other = current.iter().rev().find(|t| !earlier.contains(*t))?;
    Some(as_question(&format!("How is {} related to {}", shared, other)))
}

/// Content words worth asking about, first occurrence order.
pub fn salient_terms(words: &[&str], cues: &CueConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(|w| key(w))
        .filter(|k| {
            k.chars().count() >= MIN_TERM_LEN
                && k.chars().all(char::is_alphabetic)
                && !cues.is_stopword(k)
        })
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Simple recall: a rewrite of the stated fact, or a prompt about its subject.
pub fn basic_question(words: &[&str], cues: &CueConfig) -> Option<String> {
    if let Some(r) = rewrite::infer(words, cues) {
        return Some(r.question);
    }
    let subject = focus(words, cues)?;
    if subject.is_empty() || (!subject.contains(' ') && cues.is_stopword(&subject)) {
        return None;
    }
    Some(as_question(&format!("What is stated about {}", subject)))
}

/// Index of the first word at or after `from` ending in a comma.
fn comma_after(words: &[&str], from: usize) -> Option<usize> {
    words
        .iter()
        .skip(from)
        .position(|w| w.ends_with(','))
        .map(|p| p + from)
}

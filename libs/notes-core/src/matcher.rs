//! Pattern matcher for explicit question/answer markup.
//!
//! # Formats
//! Tried in this order against every unclaimed line; the first format that
//! matches claims the question line and its answer line(s).
//! ```text
//! Q: What is the capital of France?      (Qa)
//! A: Paris
//!
//! Question: When did World War II end?   (QuestionAnswer)
//! Answer: 1945
//!
//! Q3: What is the chemical symbol for water?   (NumberedQa)
//! A3: H2O
//!
//! 4. Who painted the Mona Lisa?          (NumberedList)
//!    Leonardo da Vinci
//!
//! What is the largest mammal?            (QuestionMark)
//! Blue whale
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::CueConfig;
use crate::types::{CardFormat, FlashCard, NormalizedLine};

static QA_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^q\s*:\s*(.*)$").expect("valid regex"));
static QA_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:a|ans)\s*:\s*(.*)$").expect("valid regex"));
static LONG_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^question\s*:\s*(.*)$").expect("valid regex"));
static LONG_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^answer\s*:\s*(.*)$").expect("valid regex"));
static NUMBERED_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^q\s*(\d+)\s*[.:]\s*(.*)$").expect("valid regex"));
static NUMBERED_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^a\s*(\d+)\s*[.:]\s*(.*)$").expect("valid regex"));
// The item text must not start with a digit so "3.14 is pi" stays prose.
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3})\s*\.\s*(\D.*)$").expect("valid regex"));

/// Pattern formats in priority order.
pub const PATTERN_FORMATS: [CardFormat; 5] = [
    CardFormat::Qa,
    CardFormat::QuestionAnswer,
    CardFormat::NumberedQa,
    CardFormat::NumberedList,
    CardFormat::QuestionMark,
];

/// A card plus the number of lines it consumed, starting at the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub card: FlashCard,
    pub consumed: usize,
}

/// Scan lines top to bottom and extract every marked-up flashcard.
///
/// No line contributes to more than one card: the scan cursor moves past
/// every claimed line and never revisits it.
pub fn match_patterns(lines: &[NormalizedLine], cues: &CueConfig) -> Vec<FlashCard> {
    match_with_remainder(lines, cues).0
}

/// Like [`match_patterns`], also returning the lines no card claimed.
pub fn match_with_remainder(
    lines: &[NormalizedLine],
    cues: &CueConfig,
) -> (Vec<FlashCard>, Vec<NormalizedLine>) {
    let mut cards = Vec::new();
    let mut unclaimed = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        match match_at(lines, pos, cues) {
            Some(claim) => {
                pos += claim.consumed;
                cards.push(claim.card);
            }
            None => {
                unclaimed.push(lines[pos].clone());
                pos += 1;
            }
        }
    }

    (cards, unclaimed)
}

/// Try every format against the line at `pos`; first match wins.
pub fn match_at(lines: &[NormalizedLine], pos: usize, cues: &CueConfig) -> Option<Claim> {
    PATTERN_FORMATS
        .iter()
        .find_map(|format| try_format(*format, lines, pos, cues))
}

/// Try a single format against the line at `pos`.
pub fn try_format(
    format: CardFormat,
    lines: &[NormalizedLine],
    pos: usize,
    cues: &CueConfig,
) -> Option<Claim> {
    match format {
        CardFormat::Qa => match_marked(lines, pos, cues, format, &QA_QUESTION, &QA_ANSWER),
        CardFormat::QuestionAnswer => {
            match_marked(lines, pos, cues, format, &LONG_QUESTION, &LONG_ANSWER)
        }
        CardFormat::NumberedQa => match_numbered(lines, pos, cues),
        CardFormat::NumberedList => {
            let caps = LIST_ITEM.captures(&lines[pos].text)?;
            match_unmarked(lines, pos, format, caps.get(2)?.as_str())
        }
        CardFormat::QuestionMark => {
            let text = &lines[pos].text;
            if !text.ends_with('?') || is_answer_marker(text) {
                return None;
            }
            match_unmarked(lines, pos, format, strip_question_marker(text))
        }
        _ => None,
    }
}

fn match_marked(
    lines: &[NormalizedLine],
    pos: usize,
    cues: &CueConfig,
    format: CardFormat,
    question_re: &Regex,
    answer_re: &Regex,
) -> Option<Claim> {
    let question = question_re.captures(&lines[pos].text)?;
    let answer_line = lines.get(pos + 1)?;
    let answer = answer_re.captures(&answer_line.text)?;

    build_marked(lines, pos, cues, format, capture(&question, 1), capture(&answer, 1))
}

fn match_numbered(lines: &[NormalizedLine], pos: usize, cues: &CueConfig) -> Option<Claim> {
    let question = NUMBERED_QUESTION.captures(&lines[pos].text)?;
    let answer_line = lines.get(pos + 1)?;
    let answer = NUMBERED_ANSWER.captures(&answer_line.text)?;

    // Q1 only pairs with A1.
    if !same_number(capture(&question, 1), capture(&answer, 1)) {
        return None;
    }

    build_marked(
        lines,
        pos,
        cues,
        CardFormat::NumberedQa,
        capture(&question, 2),
        capture(&answer, 2),
    )
}

/// Join the marked answer with any plain continuation lines after it.
fn build_marked(
    lines: &[NormalizedLine],
    pos: usize,
    cues: &CueConfig,
    format: CardFormat,
    question: &str,
    answer: &str,
) -> Option<Claim> {
    let mut parts = vec![answer.trim()];
    let mut consumed = 2;

    for line in lines
        .iter()
        .skip(pos + 2)
        .take(cues.answer_continuation_lines)
    {
        if is_question_like(&line.text) || is_answer_marker(&line.text) {
            break;
        }
        parts.push(line.text.as_str());
        consumed += 1;
    }

    let answer = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let card = FlashCard::new(question, &answer, format, lines[pos].index)?;
    Some(Claim { card, consumed })
}

/// Pair a question with the next line, which carries no required marker.
fn match_unmarked(
    lines: &[NormalizedLine],
    pos: usize,
    format: CardFormat,
    question: &str,
) -> Option<Claim> {
    let answer_line = lines.get(pos + 1)?;
    let text = answer_line.text.as_str();

    // A numbered answer belongs to a numbered question; pairing it here
    // would let a mismatched Q1/A2 through.
    if is_question_like(text) || NUMBERED_ANSWER.is_match(text) {
        return None;
    }

    let answer = strip_answer_marker(text);
    let card = FlashCard::new(question, answer, format, lines[pos].index)?;
    Some(Claim { card, consumed: 2 })
}

/// Whether a line looks like the start of a new question in any format.
pub fn is_question_like(text: &str) -> bool {
    text.trim_end().ends_with('?')
        || QA_QUESTION.is_match(text)
        || LONG_QUESTION.is_match(text)
        || NUMBERED_QUESTION.is_match(text)
        || LIST_ITEM.is_match(text)
}

/// Whether a line carries an explicit answer marker.
pub fn is_answer_marker(text: &str) -> bool {
    QA_ANSWER.is_match(text) || LONG_ANSWER.is_match(text) || NUMBERED_ANSWER.is_match(text)
}

/// Drop a leading question or answer marker from an unpaired line.
pub fn strip_markers(text: &str) -> &str {
    let stripped = strip_question_marker(text);
    if stripped.len() < text.len() {
        return stripped;
    }
    let stripped = strip_answer_marker(text);
    if stripped.len() < text.len() {
        return stripped;
    }
    NUMBERED_ANSWER
        .captures(text)
        .and_then(|c| c.get(2))
        .map_or(text, |m| m.as_str())
}

fn strip_question_marker(text: &str) -> &str {
    [&*QA_QUESTION, &*LONG_QUESTION]
        .iter()
        .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
        .or_else(|| NUMBERED_QUESTION.captures(text).and_then(|c| c.get(2)))
        .map(|m| m.as_str())
        .unwrap_or(text)
}

fn strip_answer_marker(text: &str) -> &str {
    [&*QA_ANSWER, &*LONG_ANSWER]
        .iter()
        .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
        .unwrap_or(text)
}

fn capture<'t>(caps: &Captures<'t>, group: usize) -> &'t str {
    caps.get(group).map(|m| m.as_str()).unwrap_or("")
}

/// Compare digit strings by value without parsing, so any length works.
fn same_number(a: &str, b: &str) -> bool {
    a.trim_start_matches('0') == b.trim_start_matches('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Vec<FlashCard> {
        match_patterns(&normalize(text), &CueConfig::default())
    }

    fn formats(cards: &[FlashCard]) -> Vec<CardFormat> {
        cards.iter().map(|c| c.format).collect()
    }

    #[test]
    fn qa_and_question_answer_pairs() {
        let cards = extract(
            "Q: What is the capital of France?\nA: Paris\n\nQuestion: When did World War II end?\nAnswer: 1945",
        );
        assert_eq!(
            cards,
            vec![
                FlashCard {
                    question: "What is the capital of France?".to_string(),
                    answer: "Paris".to_string(),
                    format: CardFormat::Qa,
                    source_line: 0,
                },
                FlashCard {
                    question: "When did World War II end?".to_string(),
                    answer: "1945".to_string(),
                    format: CardFormat::QuestionAnswer,
                    source_line: 2,
                },
            ]
        );
    }

    #[test]
    fn blank_lines_between_pairs_are_transparent() {
        let cards = extract("Q: One?\nA: 1\n\n\n\nQ: Two?\n\nA: 2\n\nQ: Three?\nA: 3");
        assert_eq!(cards.len(), 3);
        assert_eq!(formats(&cards), vec![CardFormat::Qa; 3]);
        assert_eq!(cards[1].question, "Two?");
        assert_eq!(cards[1].answer, "2");
    }

    #[test]
    fn markers_are_case_insensitive() {
        let cards = extract("q : lowercase?\nans: yes\nQUESTION: upper?\nANSWER: also yes");
        assert_eq!(formats(&cards), vec![CardFormat::Qa, CardFormat::QuestionAnswer]);
        assert_eq!(cards[0].question, "lowercase?");
        assert_eq!(cards[0].answer, "yes");
    }

    #[test]
    fn numbered_list_item_with_following_answer() {
        let cards = extract(
            "1. What is photosynthesis?\n   The process by which plants convert sunlight into energy",
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].format, CardFormat::NumberedList);
        assert_eq!(cards[0].question, "What is photosynthesis?");
        assert_eq!(
            cards[0].answer,
            "The process by which plants convert sunlight into energy"
        );
    }

    #[test]
    fn numbered_pairs_must_share_number() {
        let cards = extract("Q1: What is machine learning?\nA1: A subset of AI");
        assert_eq!(formats(&cards), vec![CardFormat::NumberedQa]);

        let cards = extract("Q1: What is machine learning?\nA2: A subset of AI");
        assert!(cards.is_empty());
    }

    #[test]
    fn numbered_pairs_compare_digits_of_any_length() {
        let cards = extract("Q99999999999999999999: Big?\nA99999999999999999999: Yes");
        assert_eq!(formats(&cards), vec![CardFormat::NumberedQa]);

        let cards = extract("Q007: Agent?\nA7: Bond");
        assert_eq!(cards[0].answer, "Bond");

        let cards = extract("Q99999999999999999999: Big?\nA99999999999999999998: No");
        assert!(cards.is_empty());
    }

    #[test]
    fn unclaimed_lines_and_marker_stripping() {
        let lines = normalize("Stray note\nQ: Capital of Peru?\nA: Lima\nA: Orphan answer");
        let (cards, unclaimed) = match_with_remainder(&lines, &CueConfig::default());
        assert_eq!(cards.len(), 1);
        let texts: Vec<&str> = unclaimed.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Stray note", "A: Orphan answer"]);

        assert_eq!(strip_markers("Question: Why?"), "Why?");
        assert_eq!(strip_markers("Ans: Lima"), "Lima");
        assert_eq!(strip_markers("A3. Rust"), "Rust");
        assert_eq!(strip_markers("Osmosis: water movement"), "Osmosis: water movement");
    }

    #[test]
    fn numbered_markers_accept_dot() {
        let cards = extract("Q2. Name a language\nA2. Rust");
        assert_eq!(cards[0].format, CardFormat::NumberedQa);
        assert_eq!(cards[0].answer, "Rust");
    }

    #[test]
    fn question_mark_heuristic() {
        let cards = extract(
            "What is the largest planet in our solar system?\nJupiter\n\nHow many continents are there?\nSeven continents",
        );
        assert_eq!(formats(&cards), vec![CardFormat::QuestionMark; 2]);
        assert_eq!(cards[1].answer, "Seven continents");
    }

    #[test]
    fn question_mark_strips_markers_on_both_sides() {
        let cards = extract("Q: What is H2O?\nWater\nWhy is the sky blue?\nAnswer: Scattering");
        assert_eq!(cards.len(), 2);
        // Q: without A: falls through to the question-mark heuristic.
        assert_eq!(cards[0].format, CardFormat::QuestionMark);
        assert_eq!(cards[0].question, "What is H2O?");
        assert_eq!(cards[1].answer, "Scattering");
    }

    #[test]
    fn missing_answer_drops_candidate() {
        assert!(extract("Q: What is this?").is_empty());
        assert!(extract("Q: What is X?\nQ: What is Y?").is_empty());
        assert!(extract("A: Answer 1\nA: Answer 2").is_empty());
        assert!(extract("1. First item").is_empty());
    }

    #[test]
    fn empty_sides_are_discarded() {
        assert!(extract("Q:\nA: orphan").is_empty());
        assert!(extract("Q: Something?\nA:").is_empty());
    }

    #[test]
    fn claimed_lines_are_not_reused() {
        // The answer line ends in '?' but is already claimed by the Q/A pair.
        let cards = extract("Q: Is it?\nA: Who knows?\nWhere now?\nHere");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].answer, "Who knows?");
        assert_eq!(cards[1].question, "Where now?");
        assert_eq!(cards[1].source_line, 2);

        let cards = extract("1. Is Rust fast?\nWhat about Go?\nAlso fast");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].format, CardFormat::QuestionMark);
        assert_eq!(cards[0].source_line, 1);
    }

    #[test]
    fn continuation_lines_join_the_answer() {
        let cards = extract(
            "Q: Name the steps\nA: Heat the water\nAdd the leaves\nWait\nServe\nQ: Next?\nA: Done",
        );
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].answer, "Heat the water Add the leaves Wait");
        // "Serve" exceeds the continuation limit and stays unclaimed.
        assert_eq!(cards[1].question, "Next?");
    }

    #[test]
    fn continuation_respects_config() {
        let cues = CueConfig {
            answer_continuation_lines: 0,
            ..CueConfig::default()
        };
        let cards = match_patterns(&normalize("Q: Steps\nA: One\nTwo"), &cues);
        assert_eq!(cards[0].answer, "One");
    }

    #[test]
    fn complex_mixed_document() {
        let text = "Q: What is artificial intelligence?
A: Technology that enables machines to simulate human intelligence

Question: What is the speed of light?
Answer: 299,792,458 meters per second

Q3: What is the chemical symbol for water?
A3: H2O

4. Who painted the Mona Lisa?
   Leonardo da Vinci

What is the largest mammal?
Blue whale";
        let cards = extract(text);
        assert_eq!(
            formats(&cards),
            vec![
                CardFormat::Qa,
                CardFormat::QuestionAnswer,
                CardFormat::NumberedQa,
                CardFormat::NumberedList,
                CardFormat::QuestionMark,
            ]
        );
        let lines: Vec<usize> = cards.iter().map(|c| c.source_line).collect();
        assert_eq!(lines, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn duplicates_pass_through() {
        let cards = extract("Q: Same?\nA: Yes\nQ: Same?\nA: Yes");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], FlashCard { source_line: 0, ..cards[1].clone() });
    }

    #[test]
    fn prose_yields_nothing() {
        let cards = extract(
            "This is just regular text without any\nquestion and answer patterns.\nIt should not generate any flashcards.",
        );
        assert!(cards.is_empty());
    }

    #[test]
    fn decimals_are_not_list_items() {
        assert!(!is_question_like("3.14 is close to pi"));
        assert!(is_question_like("12. Define entropy"));
    }

    #[test]
    fn earlier_format_wins_over_question_mark() {
        let lines = normalize("Q: Does this end in a question mark?\nA: Yes");
        let claim = match_at(&lines, 0, &CueConfig::default()).unwrap();
        assert_eq!(claim.card.format, CardFormat::Qa);
        assert_eq!(claim.consumed, 2);
        assert!(try_format(CardFormat::QuestionMark, &lines, 0, &CueConfig::default()).is_some());
    }
}

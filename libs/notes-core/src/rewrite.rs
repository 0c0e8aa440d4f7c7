//! Sentence rewrite rules: turn a declarative sentence into a question by
//! swapping its key date, number or named entity for an interrogative.
//!
//! Each rule is a pure function over the sentence's words and returns
//! `None` when it does not apply. [`infer`] runs them in priority order.

use crate::config::CueConfig;
use crate::sentence::{as_question, clean, find_phrase, is_capitalized, is_number, join, key, lower_leading};
use crate::types::CardFormat;

const DATE_PREPOSITIONS: [&str; 10] = [
    "in", "on", "since", "until", "by", "during", "from", "before", "after", "around",
];
const NAME_PARTICLES: [&str; 9] = ["of", "the", "da", "de", "van", "von", "la", "le", "and"];
const ARTICLES: [&str; 3] = ["a", "an", "the"];
const COPULAS: [&str; 4] = ["is", "are", "was", "were"];

/// A question synthesized from a sentence, with the swapped-out value as answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub question: String,
    pub answer: String,
    pub format: CardFormat,
}

impl Rewrite {
    fn new(question: String, answer: String, format: CardFormat) -> Option<Self> {
        let answer = answer.trim().to_string();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            question,
            answer,
            format,
        })
    }
}

type Rule = fn(&[&str], &CueConfig) -> Option<Rewrite>;

const RULES: [Rule; 7] = [
    date,
    quantity,
    entity_object,
    by_agent,
    agent_subject,
    definition,
    proper_noun,
];

/// Apply the first rule that fits the sentence.
pub fn infer(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    if words.len() < 2 {
        return None;
    }
    RULES.iter().find_map(|rule| rule(words, cues))
}

/// A date or year: "signed in 1776" -> "When was ... signed?".
pub fn date(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    let (start, end, interrogative) = find_date(words, cues)?;
    let answer = join(&words[start..end]);
    let prep = start
        .checked_sub(1)
        .filter(|&p| matches!(key(words[p]).as_str(), "in" | "on"));

    // Terminal "in <date>" after a linking verb inverts cleanly.
    if let Some(p) = prep {
        if end == words.len() {
            if let Some(k) = linking_verb(&words[..p], cues) {
                let question = format!(
                    "When {} {} {}",
                    key(words[k]),
                    lower_leading(&join(&words[..k]), cues),
                    join(&words[k + 1..p])
                );
                return Rewrite::new(as_question(&question), answer, CardFormat::Date);
            }
        }
    }

    let question = replace(words, start, end, interrogative);
    Rewrite::new(as_question(&question), answer, CardFormat::Date)
}

/// A number with a counted word: "has 206 bones" -> "has how many bones?".
pub fn quantity(words: &[&str], _cues: &CueConfig) -> Option<Rewrite> {
    let i = (0..words.len()).find(|&i| is_number(words[i]) && !is_dated_year(words, i))?;
    let next = words.get(i + 1).map(|w| key(w));

    let (end, interrogative, answer) = if words[i].ends_with('%') {
        (i + 1, "what percentage", clean_number(words[i]).to_string() + "%")
    } else if next.as_deref() == Some("percent") {
        (i + 2, "what percentage", join(&words[i..i + 2]))
    } else if next
        .as_deref()
        .is_some_and(|n| !n.is_empty() && n.chars().all(char::is_alphabetic))
    {
        (i + 1, "how many", clean_number(words[i]).to_string())
    } else {
        (i + 1, "what number", clean_number(words[i]).to_string())
    };

    let question = replace(words, i, end, interrogative);
    Rewrite::new(as_question(&question), answer, CardFormat::Quantity)
}

/// A named entity after a copula: "The capital of France is Paris".
pub fn entity_object(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    let k = words.iter().position(|w| COPULAS.contains(&key(w).as_str()))?;
    if k == 0 || !is_proper_phrase(&words[k + 1..], cues) {
        return None;
    }
    let subject = &words[..k];
    if subject.len() == 1 && cues.is_stopword(clean(subject[0])) {
        return None;
    }

    let wh = if subject.iter().any(|w| cues.is_person_noun(clean(w))) {
        "Who"
    } else {
        "What"
    };
    let question = format!("{} {} {}", wh, key(words[k]), lower_leading(&join(subject), cues));
    Rewrite::new(as_question(&question), join(&words[k + 1..]), CardFormat::Entity)
}

/// A passive agent: "The telephone was invented by Alexander Graham Bell".
pub fn by_agent(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    let j = find_phrase(words, "by")?;
    if j == 0 || !is_proper_phrase(&words[j + 1..], cues) {
        return None;
    }
    let answer = join(&words[j + 1..]);

    // "<S> was <agent verb> by X" reads best as "Who <verb> <S>?".
    if j >= 3 && COPULAS.contains(&key(words[j - 2]).as_str()) && cues.is_agent_verb(clean(words[j - 1])) {
        let subject = lower_leading(&join(&words[..j - 2]), cues);
        let question = format!("Who {} {}", clean(words[j - 1]), subject);
        return Rewrite::new(as_question(&question), answer, CardFormat::Entity);
    }

    let question = format!("{} by whom", join(&words[..j]));
    Rewrite::new(as_question(&question), answer, CardFormat::Entity)
}

/// A named subject of an agent verb: "Leonardo da Vinci painted the Mona Lisa".
pub fn agent_subject(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    let v = words.iter().position(|w| cues.is_agent_verb(clean(w)))?;
    if v == 0 || v + 1 >= words.len() || !is_proper_phrase(&words[..v], cues) {
        return None;
    }
    let question = format!("Who {}", join(&words[v..]));
    Rewrite::new(as_question(&question), join(&words[..v]), CardFormat::Entity)
}

/// A definition: "Photosynthesis is the process by which ...".
pub fn definition(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    let k = words.iter().position(|w| COPULAS.contains(&key(w).as_str()))?;
    if k == 0 || k > 5 || words.len() < k + 3 {
        return None;
    }
    if !ARTICLES.contains(&key(words[k + 1]).as_str()) {
        return None;
    }
    let term = &words[..k];
    if term.len() == 1 && cues.is_stopword(clean(term[0])) {
        return None;
    }

    let question = format!("What {} {}", key(words[k]), lower_leading(&join(term), cues));
    Rewrite::new(as_question(&question), join(&words[k + 1..]), CardFormat::Definition)
}

/// Any other named entity past the first word: "The Nile flows through Egypt".
pub fn proper_noun(words: &[&str], cues: &CueConfig) -> Option<Rewrite> {
    let (start, end) = proper_runs(words, cues)
        .into_iter()
        .filter(|(start, _)| *start > 0)
        .last()?;
    let question = replace(words, start, end, "what");
    Rewrite::new(as_question(&question), join(&words[start..end]), CardFormat::Entity)
}

/// Move a linking verb ahead of its subject: "plants are green" -> "are plants green".
pub fn invert(words: &[&str], cues: &CueConfig) -> Option<String> {
    let k = linking_verb(words, cues)?;
    Some(format!(
        "{} {} {}",
        key(words[k]),
        lower_leading(&join(&words[..k]), cues),
        join(&words[k + 1..])
    )
    .trim()
    .to_string())
}

/// The words before the first linking verb, or the leading name.
pub fn focus(words: &[&str], cues: &CueConfig) -> Option<String> {
    if let Some(k) = linking_verb(words, cues) {
        return Some(lower_leading(&join(&words[..k]), cues));
    }
    let first = words.first()?;
    if is_capitalized(first) {
        let end = words
            .iter()
            .skip(1)
            .position(|w| !is_capitalized(w))
            .map_or(words.len(), |p| p + 1);
        return Some(lower_leading(&join(&words[..end]), cues));
    }
    Some(clean(first).to_string())
}

fn linking_verb(words: &[&str], cues: &CueConfig) -> Option<usize> {
    words
        .iter()
        .position(|w| cues.is_linking_verb(clean(w)))
        .filter(|&k| k > 0)
}

/// Locate a date: "July 4, 1776", "4 July 1776", "May 1776" or a bare year.
/// Returns the span and the interrogative that replaces it.
fn find_date(words: &[&str], cues: &CueConfig) -> Option<(usize, usize, &'static str)> {
    let is_day = |w: &str| {
        let c = clean(w).trim_end_matches(|c: char| c.is_alphabetic());
        c.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d))
    };

    for i in 0..words.len() {
        if cues.is_month(clean(words[i])) {
            if let (Some(d), Some(y)) = (words.get(i + 1), words.get(i + 2)) {
                if is_day(d) && is_year_token(y) {
                    return Some((i, i + 3, "what date"));
                }
            }
            let year_follows = words.get(i + 1).is_some_and(|y| is_year_token(y));
            if i > 0 && is_day(words[i - 1]) && year_follows {
                return Some((i - 1, i + 2, "what date"));
            }
            if year_follows {
                return Some((i, i + 2, "what month"));
            }
        }
    }

    (0..words.len()).find_map(|i| {
        if !is_year_token(words[i]) {
            return None;
        }
        let after_prep = i > 0 && DATE_PREPOSITIONS.contains(&key(words[i - 1]).as_str());
        let followed_by_word = words
            .get(i + 1)
            .is_some_and(|n| clean(n).chars().next().is_some_and(char::is_alphabetic));
        if cues.is_unit(clean(words.get(i + 1).copied().unwrap_or(""))) {
            return None;
        }
        (after_prep || !followed_by_word).then_some((i, i + 1, "what year"))
    })
}

/// Whether `words[i]` is a year introduced by a preposition ("in 1492").
pub fn is_dated_year(words: &[&str], i: usize) -> bool {
    is_year_token(words[i])
        && i > 0
        && DATE_PREPOSITIONS.contains(&key(words[i - 1]).as_str())
}

fn is_year_token(word: &str) -> bool {
    let c = clean(word);
    c.len() == 4 && c.parse::<u32>().is_ok_and(|y| (1000..=2099).contains(&y))
}

/// Whether the words form a name: capitalized words joined by particles,
/// optionally led by "the".
fn is_proper_phrase(words: &[&str], cues: &CueConfig) -> bool {
    let words = match words.first() {
        Some(w) if key(w) == "the" => &words[1..],
        _ => words,
    };
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return false;
    };
    if words.len() > 6 || !is_name_word(first, cues) || !is_name_word(last, cues) {
        return false;
    }
    words
        .iter()
        .all(|w| is_name_word(w, cues) || NAME_PARTICLES.contains(&key(w).as_str()))
}

fn is_name_word(word: &str, cues: &CueConfig) -> bool {
    let c = clean(word);
    is_capitalized(c) && c != "I" && !cues.is_stopword(c)
}

/// Maximal runs of name words as `(start, end)` ranges.
fn proper_runs(words: &[&str], cues: &CueConfig) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < words.len() {
        if !is_name_word(words[i], cues) {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i + 1;
        while end < words.len() {
            if is_name_word(words[end], cues) {
                end += 1;
            } else if NAME_PARTICLES.contains(&key(words[end]).as_str())
                && words.get(end + 1).is_some_and(|w| is_name_word(w, cues))
            {
                end += 2;
            } else {
                break;
            }
        }
        runs.push((start, end));
        i = end;
    }
    runs
}

/// Swap `words[start..end]` for `with`, keeping punctuation trailing the span.
fn replace(words: &[&str], start: usize, end: usize, with: &str) -> String {
    let trailing: String = words[end - 1]
        .chars()
        .rev()
        .take_while(|c| matches!(c, ',' | ';' | ':'))
        .collect();
    let mut parts: Vec<String> = words[..start].iter().map(|w| w.to_string()).collect();
    parts.push(format!("{}{}", with, trailing));
    parts.extend(words[end..].iter().map(|w| w.to_string()));
    parts.join(" ")
}

fn clean_number(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_ascii_digit())
}

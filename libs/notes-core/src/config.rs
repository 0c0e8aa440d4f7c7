//! Cue lists and limits driving the heuristic stages.
//!
//! Everything the semantic extractor and question classifier key on lives
//! here so the heuristics can be inspected, overridden from JSON and tested
//! in isolation.

use serde::{Deserialize, Serialize};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Cue configuration for extraction and question generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    /// Measurement words that turn a number into a quantity with a unit.
    pub unit_words: Vec<String>,
    /// Words that mark a quantitative relation between numbers.
    pub quantitative_words: Vec<String>,
    /// Arithmetic operator characters.
    pub operator_chars: Vec<char>,
    /// Verbs linking a cause to its effect ("X leads to Y").
    pub causal_verbs: Vec<String>,
    /// Connectives introducing a stated result ("X, therefore Y").
    pub result_connectives: Vec<String>,
    /// Connectives placed between an effect and its cause ("Y because X").
    pub effect_first_connectives: Vec<String>,
    /// Markers opening a condition clause.
    pub conditional_markers: Vec<String>,
    /// Markers relating two things to each other.
    pub comparative_markers: Vec<String>,
    /// Verbs whose subject is usually a person.
    pub agent_verbs: Vec<String>,
    /// Role nouns that make a "who" question more natural than "what".
    pub person_nouns: Vec<String>,
    /// Auxiliary and linking verbs used for subject/verb inversion.
    pub linking_verbs: Vec<String>,
    /// Lowercase abbreviations (without the trailing dot) that never end a sentence.
    pub abbreviations: Vec<String>,
    /// Abbreviations that only hold a sentence open when a number follows ("No. 5").
    pub numbering_abbreviations: Vec<String>,
    /// Words ignored when looking for salient terms.
    pub stopwords: Vec<String>,
    pub month_names: Vec<String>,
    /// Plain lines absorbed into an answer after an explicit answer marker.
    pub answer_continuation_lines: usize,
    /// Sentences required before the semantic fallback is attempted.
    pub min_sentences_for_fallback: usize,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            unit_words: words(&[
                "meter", "meters", "metre", "metres", "m", "km", "kilometer", "kilometers",
                "cm", "centimeters", "mm", "millimeters", "mile", "miles", "foot", "feet",
                "inch", "inches", "yard", "yards", "gram", "grams", "g", "kg", "kilograms",
                "kilogram", "mg", "pound", "pounds", "lb", "lbs", "ounce", "ounces", "liter",
                "liters", "litre", "litres", "ml", "gallon", "gallons", "second", "seconds",
                "minute", "minutes", "hour", "hours", "day", "days", "week", "weeks",
                "month", "months", "year", "years", "degree", "degrees", "celsius",
                "fahrenheit", "kelvin", "volt", "volts", "watt", "watts", "joule", "joules",
                "newton", "newtons", "hertz", "hz", "kph", "mph", "km/h", "percent",
                "dollars", "euros", "calories", "atoms", "molecules", "moles", "mol",
            ]),
            quantitative_words: words(&[
                "plus", "minus", "times", "divided", "multiplied", "sum", "total", "average",
                "ratio", "per", "percent", "percentage", "twice", "half", "double", "triple",
                "squared", "cubed", "equals", "more than", "less than", "greater than",
                "fewer than", "at least", "at most",
            ]),
            operator_chars: vec!['+', '*', '/', '=', '^', '%', '×', '÷'],
            causal_verbs: words(&[
                "causes", "caused", "leads to", "led to", "results in", "resulted in",
                "produces", "triggers", "allows", "enables", "prevents",
            ]),
            result_connectives: words(&[
                "therefore", "thus", "hence", "as a result", "consequently", "which means",
            ]),
            effect_first_connectives: words(&["because", "due to", "owing to", "since"]),
            conditional_markers: words(&["if", "unless", "provided that", "whenever"]),
            comparative_markers: words(&[
                "whereas", "unlike", "compared to", "compared with", "in contrast to",
                "similar to", "versus", "than",
            ]),
            agent_verbs: words(&[
                "invented", "discovered", "painted", "wrote", "composed", "founded",
                "developed", "proposed", "designed", "built", "created", "established",
                "led", "ruled", "directed", "authored", "formulated", "said",
            ]),
            person_nouns: words(&[
                "inventor", "author", "founder", "president", "king", "queen", "painter",
                "scientist", "writer", "leader", "emperor", "composer", "discoverer",
                "philosopher", "father", "mother", "creator", "ruler", "pharaoh",
            ]),
            linking_verbs: words(&[
                "is", "are", "was", "were", "has", "have", "had", "can", "could", "will",
                "would", "should", "may", "might", "must", "does", "did", "do",
            ]),
            abbreviations: words(&[
                "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "e.g", "i.e", "approx",
                "fig", "jr", "sr", "inc", "ltd",
            ]),
            numbering_abbreviations: words(&["no", "nos", "vol", "ch", "pp"]),
            stopwords: words(&[
                "the", "a", "an", "and", "or", "but", "of", "in", "on", "at", "to", "for",
                "by", "with", "from", "into", "is", "are", "was", "were", "be", "been",
                "it", "its", "this", "that", "these", "those", "they", "them", "their",
                "there", "which", "who", "what", "when", "where", "why", "how", "as",
                "also", "not", "can", "has", "have", "had", "more", "most", "than",
                "very", "such", "each", "other", "some", "many", "much", "about",
            ]),
            month_names: words(&[
                "january", "february", "march", "april", "may", "june", "july", "august",
                "september", "october", "november", "december",
            ]),
            answer_continuation_lines: 2,
            min_sentences_for_fallback: 2,
        }
    }
}

impl CueConfig {
    pub fn is_unit(&self, word: &str) -> bool {
        contains_word(&self.unit_words, word)
    }

    pub fn is_linking_verb(&self, word: &str) -> bool {
        contains_word(&self.linking_verbs, word)
    }

    pub fn is_agent_verb(&self, word: &str) -> bool {
        contains_word(&self.agent_verbs, word)
    }

    pub fn is_person_noun(&self, word: &str) -> bool {
        contains_word(&self.person_nouns, word)
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        contains_word(&self.abbreviations, word)
    }

    pub fn is_numbering_abbreviation(&self, word: &str) -> bool {
        contains_word(&self.numbering_abbreviations, word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        contains_word(&self.stopwords, word)
    }

    pub fn is_month(&self, word: &str) -> bool {
        contains_word(&self.month_names, word)
    }
}

fn contains_word(list: &[String], word: &str) -> bool {
    list.iter().any(|w| w.eq_ignore_ascii_case(word))
}

//! Line normalizer for recognized text.

use crate::types::NormalizedLine;

/// Clean raw text into ordered, non-empty lines.
///
/// Carriage returns become line breaks, invisible format characters left
/// behind by recognition engines become spaces, interior whitespace is
/// collapsed and blank lines are dropped. Indices are assigned after
/// blank lines are removed.
pub fn normalize(text: &str) -> Vec<NormalizedLine> {
    let cleaned: String = text
        .chars()
        .map(|c| match c {
            '\r' => '\n',
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => ' ',
            c if c.is_control() && c != '\n' => ' ',
            c => c,
        })
        .collect();

    cleaned
        .split('\n')
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, text)| NormalizedLine { index, text })
        .collect()
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

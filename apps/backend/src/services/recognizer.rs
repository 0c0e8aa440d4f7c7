//! Recognition engines that turn uploaded bytes into text.

use crate::error::Result;

/// A recognition engine.
///
/// Implementations run on the blocking thread pool, so `recognize` may do
/// CPU-heavy work. Returning an empty string is not an error; the extractor
/// treats it as empty input.
pub trait TextRecognizer: Send + Sync {
    /// Engine name reported by the health endpoint.
    fn name(&self) -> &str;

    /// Content types this engine can read.
    fn content_types(&self) -> Vec<String>;

    /// Whether uploads of this content type can be recognized.
    fn accepts(&self, content_type: &str) -> bool;

    fn recognize(&self, bytes: &[u8]) -> Result<String>;
}

/// Reads uploads that already contain text, such as exported transcripts.
#[derive(Debug, Default, Clone)]
pub struct PlainTextRecognizer;

impl TextRecognizer for PlainTextRecognizer {
    fn name(&self) -> &str {
        "plain-text"
    }

    fn content_types(&self) -> Vec<String> {
        vec!["text/*".to_string()]
    }

    fn accepts(&self, content_type: &str) -> bool {
        essence(content_type).starts_with("text/")
    }

    fn recognize(&self, bytes: &[u8]) -> Result<String> {
        Ok(notes_core::decode_text(bytes)?)
    }
}

/// Media type without parameters, lowercased: `Text/Plain; charset=utf-8` -> `text/plain`.
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

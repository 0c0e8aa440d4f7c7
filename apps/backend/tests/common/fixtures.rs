//! Test fixtures and factory functions for creating request data.

use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

/// Notes that contain only narrative facts, no Q/A markup.
pub const FACTUAL_PROSE: &str =
    "World War II ended in 1945. The telephone was invented by Alexander Graham Bell.";

/// Prose covering every question type.
pub const MIXED_PROSE: &str = "The speed of sound is 343 meters per second. \
Ice floats because it is less dense than water. \
Jupiter is larger than Earth. \
Paris is the capital of France.";

/// Generate notes with a specified number of `Q:`/`A:` pairs.
///
/// # Arguments
/// * `num_cards` - Number of pairs to generate
pub fn sample_notes(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("Q: Question {}?\nA: Answer {}.\n", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON body for the text endpoints.
pub fn text_request(text: &str) -> Value {
    json!({ "text": text })
}

/// A multipart form carrying `content` as the `file` field.
pub fn file_form(filename: &str, mime: &str, content: impl Into<Vec<u8>>) -> MultipartForm {
    let part = Part::bytes(content.into())
        .file_name(filename)
        .mime_type(mime);
    MultipartForm::new().add_part("file", part)
}

/// A multipart form with a plain-text `file` field.
pub fn text_file_form(filename: &str, content: &str) -> MultipartForm {
    file_form(filename, "text/plain", content.as_bytes().to_vec())
}

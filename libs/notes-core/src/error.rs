//! Error types for notes-core.

use thiserror::Error;

/// Result type alias using ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors surfaced by the extraction core.
///
/// Every `&str` entry point degrades gracefully and never fails; the only
/// failure is handing the core bytes that are not text at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

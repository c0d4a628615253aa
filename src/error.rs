//! Error types for the extractor.

use thiserror::Error;

/// Result type alias using ExtractorError.
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Main error type for extraction runs.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Failed to read or parse a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to parse or write JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry data handed to an extractor is malformed or missing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An internal invariant was broken. Always a bug, never recovered from.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    /// The snapshot could not be located or has an unusable structure.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// An extractor name did not match any known extractor.
    #[error("Unknown extractor: {0}")]
    UnknownExtractor(String),
}

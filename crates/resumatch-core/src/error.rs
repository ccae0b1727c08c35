//! Error types for the resumatch-core library.
//!
//! Extraction and scoring are total and have no error type of their own.
//! Everything here belongs to the layers around them: document ingestion and
//! configuration handling.

use thiserror::Error;

/// Main error type for the resumatch library.
#[derive(Error, Debug)]
pub enum ResumatchError {
    /// Document ingestion error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while validating or decoding an uploaded resume.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The declared MIME type or file extension is not accepted.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The upload exceeds the configured size limit.
    #[error("document is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    /// The upload contains no bytes.
    #[error("document is empty")]
    Empty,

    /// Failed to decode the document into text.
    #[error("failed to decode text: {0}")]
    Decode(String),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the resumatch library.
pub type Result<T> = std::result::Result<T, ResumatchError>;

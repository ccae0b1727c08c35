//! Resume document ingestion: upload validation and text decoding.

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "pdf")]
pub use pdf::{PdfProcessor, PdfTextExtractor};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DocumentError, Result};
use crate::models::config::{IngestConfig, ResumatchConfig};
use crate::models::profile::ExtractedProfile;
use crate::resume::ResumeParser;

/// Result type for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Declared format of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Pdf,
}

impl DocumentFormat {
    /// Map a MIME type (parameters such as `charset` are ignored).
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "text/plain" => Some(Self::PlainText),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Map a file extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Map a file path by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Pdf => "application/pdf",
        }
    }
}

/// Uploaded bytes plus their declared format, borrowed for one parse call.
#[derive(Debug, Clone, Copy)]
pub struct RawDocument<'a> {
    pub bytes: &'a [u8],
    pub format: DocumentFormat,
}

impl<'a> RawDocument<'a> {
    pub fn new(bytes: &'a [u8], format: DocumentFormat) -> Self {
        Self { bytes, format }
    }
}

/// Outcome of parsing an uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Extracted candidate attributes.
    pub profile: ExtractedProfile,
    /// Leading part of the decoded text, for a quick visual check.
    pub text_preview: String,
    /// Length of the decoded text in characters.
    pub char_count: usize,
}

/// Validate an upload before reading it.
///
/// Checks the MIME type against the allow-list and the size against the
/// limit, returning the format to decode with.
pub fn validate_upload(
    mime: &str,
    size: u64,
    config: &IngestConfig,
) -> DocumentResult<DocumentFormat> {
    let format = DocumentFormat::from_mime_type(mime)
        .filter(|format| {
            config
                .allowed_mime_types
                .iter()
                .any(|allowed| DocumentFormat::from_mime_type(allowed) == Some(*format))
        })
        .ok_or_else(|| DocumentError::UnsupportedFormat(mime.to_string()))?;

    check_size(size, config)?;
    Ok(format)
}

fn check_size(size: u64, config: &IngestConfig) -> DocumentResult<()> {
    if size == 0 {
        return Err(DocumentError::Empty);
    }
    if size > config.max_file_size {
        return Err(DocumentError::TooLarge {
            size,
            limit: config.max_file_size,
        });
    }
    Ok(())
}

/// Decode a document into plain text.
pub fn decode_text(document: &RawDocument<'_>) -> DocumentResult<String> {
    match document.format {
        DocumentFormat::PlainText => {
            let bytes = document
                .bytes
                .strip_prefix(b"\xEF\xBB\xBF")
                .unwrap_or(document.bytes);
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        DocumentFormat::Pdf => decode_pdf(document.bytes),
    }
}

#[cfg(feature = "pdf")]
fn decode_pdf(bytes: &[u8]) -> DocumentResult<String> {
    let mut extractor = PdfTextExtractor::new();
    extractor.load(bytes)?;
    tracing::debug!("PDF has {} pages", extractor.page_count());
    extractor.extract_text()
}

#[cfg(not(feature = "pdf"))]
fn decode_pdf(_bytes: &[u8]) -> DocumentResult<String> {
    Err(DocumentError::UnsupportedFormat(
        "application/pdf (built without PDF support)".to_string(),
    ))
}

/// First `max_chars` characters of `text`.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Decode a document and extract the candidate profile from it.
pub fn parse_resume(
    document: &RawDocument<'_>,
    config: &ResumatchConfig,
) -> Result<ParsedResume> {
    check_size(document.bytes.len() as u64, &config.ingest)?;

    info!(
        "Decoding {} byte {} document",
        document.bytes.len(),
        document.format.mime_type()
    );

    let text = decode_text(document)?;
    let profile = ResumeParser::from_config(&config.extraction).parse(&text);

    Ok(ParsedResume {
        profile,
        text_preview: text_preview(&text, config.ingest.preview_chars),
        char_count: text.chars().count(),
    })
}

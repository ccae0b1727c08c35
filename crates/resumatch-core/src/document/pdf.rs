//! PDF text-layer extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::DocumentResult;
use crate::error::DocumentError;

/// Trait for PDF text extraction implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> DocumentResult<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the text layer of the entire PDF.
    fn extract_text(&self) -> DocumentResult<String>;
}

/// PDF text extractor.
///
/// Layout is ignored; the text comes out in content-stream order, which is
/// all the resume rules need.
#[derive(Default)]
pub struct PdfTextExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfTextExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PdfProcessor for PdfTextExtractor {
    fn load(&mut self, data: &[u8]) -> DocumentResult<()> {
        let mut doc = Document::load_mem(data).map_err(|e| DocumentError::Pdf(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DocumentError::Encrypted);
            }

            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| DocumentError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DocumentError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);

        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> DocumentResult<String> {
        if self.document.is_none() {
            return Err(DocumentError::Pdf("no document loaded".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| DocumentError::Decode(e.to_string()))?;

        debug!("Extracted {} characters from PDF text layer", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfTextExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_text().is_err());
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfTextExtractor::new();
        let result = extractor.load(b"definitely not a pdf");
        assert!(matches!(result, Err(DocumentError::Pdf(_))));
    }
}

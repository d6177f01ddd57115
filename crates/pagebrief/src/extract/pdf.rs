//! PDF extraction
//!
//! Thin wrapper over the `pdf-extract` crate: per-page text concatenated
//! in page order. PDFs never contribute images.

use crate::error::BriefError;
use crate::extract::Extractor;
use crate::types::{Extraction, FetchedDocument};

/// PDF extractor backed by `pdf-extract`
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, doc: &FetchedDocument) -> Result<Extraction, BriefError> {
        let text = pdf_extract::extract_text_from_mem(&doc.bytes)
            .map_err(|e| BriefError::Parse(format!("malformed PDF: {e}")))?;
        Ok(Extraction::text_only(text))
    }
}

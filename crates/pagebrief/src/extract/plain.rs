//! Plain-text extraction
//!
//! The text is the raw decoded body. A line counts as an image only when
//! the whole line ends with an image extension; a URL buried mid-line is
//! not collected.

use crate::error::BriefError;
use crate::extract::{Extractor, IMAGE_EXTENSIONS};
use crate::types::{Extraction, FetchedDocument};

/// Plain-text extractor
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn extract(&self, doc: &FetchedDocument) -> Result<Extraction, BriefError> {
        let text = doc.text();

        let images = text
            .split('\n')
            .filter(|line| ends_with_image_extension(line))
            .map(|line| line.to_string())
            .collect();

        Ok(Extraction {
            fragments: vec![text],
            images,
        })
    }
}

/// True if the line's trailing characters are a known image extension
fn ends_with_image_extension(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

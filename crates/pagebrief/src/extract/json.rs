//! JSON extraction
//!
//! The parsed document is re-rendered as block-style YAML and used
//! verbatim as the text. Image URLs are harvested from top-level string
//! values and top-level lists of strings only; deeper nesting is not
//! scanned. That one-level scan is a known limitation of the service
//! contract, not an oversight.

use crate::error::BriefError;
use crate::extract::{Extractor, IMAGE_EXTENSIONS};
use crate::types::{Extraction, FetchedDocument};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Matches http(s) URLs ending in a known image extension
static IMAGE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = IMAGE_EXTENSIONS
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)https?://\S+\.(?:{alternation})")).expect("valid image URL pattern")
});

/// Scan a string for image URLs, in order of appearance
pub fn find_image_links(text: &str) -> Vec<String> {
    IMAGE_URL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// JSON extractor: YAML re-rendering plus a one-level image harvest
pub struct JsonExtractor;

impl Extractor for JsonExtractor {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extract(&self, doc: &FetchedDocument) -> Result<Extraction, BriefError> {
        let value: Value = serde_json::from_slice(&doc.bytes)
            .map_err(|e| BriefError::Parse(e.to_string()))?;

        let text = serde_yaml::to_string(&value).map_err(|e| BriefError::Parse(e.to_string()))?;

        let mut images = Vec::new();
        if let Value::Object(map) = &value {
            for entry in map.values() {
                match entry {
                    Value::String(s) => images.extend(find_image_links(s)),
                    Value::Array(items) => {
                        for item in items {
                            if let Value::String(s) = item {
                                images.extend(find_image_links(s));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(Extraction {
            fragments: vec![text],
            images,
        })
    }
}

//! Core types for PageBrief

use bytes::Bytes;

/// Classification of a fetched document's format.
///
/// Determined by byte-sniffing the body (see [`crate::sniff`]), never by
/// the declared `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// PDF document (`%PDF-` magic prefix)
    Pdf,
    /// HTML page
    Html,
    /// JSON document
    Json,
    /// YAML document (sniffed but has no extractor; yields an empty brief)
    Yaml,
    /// Anything else
    PlainText,
}

impl ContentKind {
    /// Stable identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Pdf => "pdf",
            ContentKind::Html => "html",
            ContentKind::Json => "json",
            ContentKind::Yaml => "yaml",
            ContentKind::PlainText => "plain_text",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the outbound fetch, before any interpretation
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Raw response body
    pub bytes: Bytes,
    /// HTTP status code the upstream answered with
    pub status: u16,
    /// Final URL after redirects
    pub final_url: String,
}

impl FetchedDocument {
    /// Body decoded as UTF-8, lossily
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).to_string()
    }
}

/// What an extractor pulled out of a document: ordered text fragments and
/// ordered image URLs. Both are built fresh per request.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Text fragments, joined by the truncation step
    pub fragments: Vec<String>,
    /// Image URLs in document order, duplicates permitted
    pub images: Vec<String>,
}

impl Extraction {
    /// Extraction with a single text fragment and no images
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![text.into()],
            images: Vec::new(),
        }
    }
}

/// Character budgets applied before formatting.
///
/// These are deployment configuration: historical deployments ran with
/// different text budgets, so callers name them instead of relying on
/// constants buried in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budgets {
    /// Maximum characters of extracted text
    pub text_chars: usize,
    /// Maximum summed characters of emitted image URLs
    pub image_chars: usize,
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            text_chars: crate::DEFAULT_TEXT_BUDGET,
            image_chars: crate::DEFAULT_IMAGE_BUDGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_display() {
        assert_eq!(ContentKind::Pdf.to_string(), "pdf");
        assert_eq!(ContentKind::Html.to_string(), "html");
        assert_eq!(ContentKind::Json.to_string(), "json");
        assert_eq!(ContentKind::Yaml.to_string(), "yaml");
        assert_eq!(ContentKind::PlainText.to_string(), "plain_text");
    }

    #[test]
    fn test_budgets_default() {
        let budgets = Budgets::default();
        assert_eq!(budgets.text_chars, 1000);
        assert_eq!(budgets.image_chars, 300);
    }

    #[test]
    fn test_fetched_document_text_lossy() {
        let doc = FetchedDocument {
            bytes: Bytes::from_static(b"hello \xff world"),
            status: 200,
            final_url: "https://example.com".to_string(),
        };
        let text = doc.text();
        assert!(text.starts_with("hello "));
        assert!(text.ends_with(" world"));
    }

    #[test]
    fn test_extraction_text_only() {
        let ex = Extraction::text_only("body");
        assert_eq!(ex.fragments, vec!["body".to_string()]);
        assert!(ex.images.is_empty());
    }
}

//! End-to-end pipeline: fetch, sniff, extract, truncate
//!
//! One linear pass per request, no state retained between calls. The
//! caller renders the returned [`Brief`] and wraps it in a persona.

use crate::error::BriefError;
use crate::extract::extract;
use crate::fetch::{fetch_document, FetchOptions};
use crate::format::Brief;
use crate::limit::{limit_images, truncate_fragments, truncate_text};
use crate::sniff::sniff;
use crate::types::{Budgets, ContentKind};

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct BriefOptions {
    /// Outbound fetch configuration
    pub fetch: FetchOptions,
    /// Character budgets for text and images
    pub budgets: Budgets,
}

/// Fetch a URL and produce a budgeted brief.
///
/// HTML truncation is paragraph-aware: fragments accumulate until the
/// budget runs out and the overflowing fragment is sliced. Every other
/// kind gets a single character cutoff over the assembled text.
pub async fn brief_url(url: &str, options: &BriefOptions) -> Result<Brief, BriefError> {
    let doc = fetch_document(url, &options.fetch).await?;

    let kind = sniff(&doc.bytes);
    tracing::debug!(kind = %kind, status = doc.status, url = %doc.final_url, "Sniffed document");

    let extraction = extract(kind, &doc)?;

    let text = match kind {
        ContentKind::Html => {
            let kept = truncate_fragments(&extraction.fragments, options.budgets.text_chars);
            // Joining re-adds separators, so the assembled text gets the
            // same final cutoff as every other kind
            truncate_text(&kept.join(" "), options.budgets.text_chars)
        }
        _ => truncate_text(&extraction.fragments.concat(), options.budgets.text_chars),
    };

    let images = limit_images(extraction.images, options.budgets.image_chars);

    Ok(Brief { kind, text, images })
}

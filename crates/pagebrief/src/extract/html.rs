//! HTML extraction
//!
//! Text comes from `<p>` elements; pages without any `<p>` fall back to
//! `<div>`, then `<span>` — each tier only when the prior tier had zero
//! elements. Image URLs are collected exclusively from `<img>` descendants
//! of each paragraph's parent container, so the div/span fallbacks never
//! contribute images.

use crate::error::BriefError;
use crate::extract::Extractor;
use crate::types::{Extraction, FetchedDocument};
use scraper::{ElementRef, Html, Selector};

/// HTML extractor backed by `scraper`
pub struct HtmlExtractor;

impl Extractor for HtmlExtractor {
    fn name(&self) -> &'static str {
        "html"
    }

    fn extract(&self, doc: &FetchedDocument) -> Result<Extraction, BriefError> {
        let html = Html::parse_document(&doc.text());

        // Selectors are static and known-good
        let p_sel = Selector::parse("p").expect("valid selector");
        let div_sel = Selector::parse("div").expect("valid selector");
        let span_sel = Selector::parse("span").expect("valid selector");
        let img_sel = Selector::parse("img").expect("valid selector");

        let mut fragments = collect_fragments(&html, &p_sel);
        if fragments.is_empty() {
            fragments = collect_fragments(&html, &div_sel);
        }
        if fragments.is_empty() {
            fragments = collect_fragments(&html, &span_sel);
        }

        let mut images = Vec::new();
        for p in html.select(&p_sel) {
            let Some(parent) = p.parent().and_then(ElementRef::wrap) else {
                continue;
            };
            for img in parent.select(&img_sel) {
                if let Some(src) = img.value().attr("src") {
                    if !src.is_empty() {
                        images.push(src.to_string());
                    }
                }
            }
        }

        Ok(Extraction { fragments, images })
    }
}

/// Text of every element matching the selector, whitespace-trimmed
fn collect_fragments(html: &Html, selector: &Selector) -> Vec<String> {
    html.select(selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

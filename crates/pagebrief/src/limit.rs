//! Truncation to character budgets
//!
//! Two independent passes: text is bounded by the text budget, the image
//! list by its own smaller budget. Counts are Unicode characters, not
//! bytes, so a multibyte fragment never splits mid-codepoint.

/// Slice text to at most `budget` characters.
///
/// A no-op for text already within budget.
pub fn truncate_text(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        text.chars().take(budget).collect()
    }
}

/// Accumulate fragments until the budget is reached.
///
/// A fragment that would overflow is itself sliced to the remaining
/// capacity and kept; everything after it is dropped. Used for HTML,
/// where truncation is paragraph-aware.
pub fn truncate_fragments(fragments: &[String], budget: usize) -> Vec<String> {
    let mut kept = Vec::new();
    let mut used = 0;

    for fragment in fragments {
        let len = fragment.chars().count();
        if used + len <= budget {
            kept.push(fragment.clone());
            used += len;
        } else {
            let remaining = budget - used;
            kept.push(fragment.chars().take(remaining).collect());
            break;
        }
    }

    kept
}

/// Rewrite a schema-relative `//host/...` URL to an absolute `http:` URL
pub fn absolutize(url: &str) -> String {
    if url.starts_with("//") {
        format!("http:{url}")
    } else {
        url.to_string()
    }
}

/// Keep image URLs while their summed character length fits the budget.
///
/// Each URL is rewritten to its absolute form first, so a schema-relative
/// URL is charged for the `http:` prefix it will be emitted with. The
/// first URL that would exceed the budget is dropped along with everything
/// after it; URLs are never truncated.
pub fn limit_images(images: Vec<String>, budget: usize) -> Vec<String> {
    let mut kept = Vec::new();
    let mut used = 0;

    for url in images {
        let url = absolutize(&url);
        let len = url.chars().count();
        if used + len > budget {
            break;
        }
        used += len;
        kept.push(url);
    }

    kept
}

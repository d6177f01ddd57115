//! Content-type sniffing
//!
//! Classifies a response body by its first bytes, ignoring whatever
//! `Content-Type` the server declared. Rules are checked in order and the
//! first match wins; a failed JSON/YAML probe parse is swallowed locally
//! and sniffing falls through to the next rule.

use crate::types::ContentKind;

/// PDF magic prefix
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Classify raw response bytes into a [`ContentKind`]
pub fn sniff(bytes: &[u8]) -> ContentKind {
    if bytes.starts_with(PDF_MAGIC) {
        return ContentKind::Pdf;
    }

    if starts_with_ignore_case(bytes, b"<!DOCTYPE HTML") || starts_with_ignore_case(bytes, b"<html")
    {
        return ContentKind::Html;
    }

    if (bytes.starts_with(b"{") || bytes.starts_with(b"["))
        && serde_json::from_slice::<serde_json::Value>(bytes).is_ok()
    {
        return ContentKind::Json;
    }

    if (bytes.starts_with(b"---") || bytes.starts_with(b"%YAML"))
        && serde_yaml::from_slice::<serde_yaml::Value>(bytes).is_ok()
    {
        return ContentKind::Yaml;
    }

    ContentKind::PlainText
}

/// ASCII-case-insensitive prefix check on raw bytes
fn starts_with_ignore_case(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len()
        && bytes
            .iter()
            .zip(prefix.iter())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}

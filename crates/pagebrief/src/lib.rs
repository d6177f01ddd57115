//! PageBrief - persona-wrapped web content briefs
//!
//! This crate fetches a remote document (web page, PDF, JSON, YAML, or
//! plain text), extracts its textual content and embedded image links,
//! truncates the result to fixed character budgets, and renders it as a
//! restricted YAML-like block for consumption by a conversational agent.
//!
//! ## Pipeline
//!
//! One linear pass per request:
//!
//! 1. [`fetch_document`] - a single outbound GET with bounded timeouts
//! 2. [`sniff`] - byte-prefix classification into a [`ContentKind`]
//! 3. [`extract`] - a format-specific extraction strategy
//! 4. [`limit`](crate::limit) - independent text and image budgets
//! 5. [`Brief::render_block`] + [`Persona::wrap`] - final response body
//!
//! [`brief_url`] runs steps 1-4; the HTTP surface lives in the companion
//! `pagebrief-server` crate.

pub mod extract;

mod error;
mod fetch;
mod format;
pub mod limit;
mod persona;
mod pipeline;
mod sniff;
mod types;

pub use error::BriefError;
pub use extract::{extract, Extractor, IMAGE_EXTENSIONS};
pub use fetch::{fetch_document, FetchOptions, CONNECT_TIMEOUT, REQUEST_TIMEOUT};
pub use format::Brief;
pub use limit::{absolutize, limit_images, truncate_fragments, truncate_text};
pub use persona::Persona;
pub use pipeline::{brief_url, BriefOptions};
pub use sniff::sniff;
pub use types::{Budgets, ContentKind, Extraction, FetchedDocument};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "PageBrief/1.0";

/// Default text character budget
pub const DEFAULT_TEXT_BUDGET: usize = 1000;

/// Default image-list character budget
pub const DEFAULT_IMAGE_BUDGET: usize = 300;

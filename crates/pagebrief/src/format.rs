//! Brief formatting
//!
//! Renders the truncated text and image list into the restricted
//! YAML-like block consumed by the persona template:
//!
//! ```text
//! text_content: |
//!   <line1>
//!   <line2>
//!
//! images:
//! - <url1>
//! ```
//!
//! JSON briefs drop the `|` marker because their text is already YAML.
//! The `images:` section is omitted entirely when no images survived the
//! budget.

use crate::types::ContentKind;

/// A fully budgeted brief, ready for persona wrapping
#[derive(Debug, Clone)]
pub struct Brief {
    /// Sniffed kind of the source document
    pub kind: ContentKind,
    /// Truncated text
    pub text: String,
    /// Budgeted, absolute image URLs
    pub images: Vec<String>,
}

impl Brief {
    /// Render the YAML-like block
    pub fn render_block(&self) -> String {
        let marker = if self.kind == ContentKind::Json { "" } else { "|" };

        let mut block = format!("text_content: {marker}\n");
        for line in self.text.split('\n') {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
        block.push('\n');

        if !self.images.is_empty() {
            block.push_str("images:\n");
            for image in &self.images {
                block.push_str("- ");
                block.push_str(image);
                block.push('\n');
            }
        }

        block
    }
}

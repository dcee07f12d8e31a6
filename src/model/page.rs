//! Page-level types.

use super::{BoundingBox, TextLine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extracted pages of one document, keyed by page number.
pub type PageMap = BTreeMap<u32, PageContent>;

/// The extracted content of a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Lines in reading order
    #[serde(default)]
    pub lines: Vec<TextLine>,

    /// Page width in the same units as the line boxes
    pub width: f64,

    /// Page height
    pub height: f64,
}

impl PageContent {
    /// Create an empty page with the given dimensions.
    pub fn new(page_number: u32, width: f64, height: f64) -> Self {
        Self {
            page_number,
            lines: Vec::new(),
            width,
            height,
        }
    }

    /// Create an empty page with standard Letter size in points.
    pub fn letter(page_number: u32) -> Self {
        Self::new(page_number, 612.0, 792.0)
    }

    /// Append a line.
    pub fn add_line(&mut self, line: TextLine) {
        self.lines.push(line);
    }

    /// Append a line built from text and a box on this page.
    pub fn push_text(&mut self, text: impl Into<String>, bbox: BoundingBox) {
        self.lines.push(TextLine::new(text, bbox, self.page_number));
    }

    /// Builder-style variant of [`PageContent::push_text`].
    pub fn with_text(mut self, text: impl Into<String>, bbox: BoundingBox) -> Self {
        self.push_text(text, bbox);
        self
    }

    /// Line texts in reading order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Page dimensions as (width, height).
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

//! Text line and bounding box types.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
    /// Right edge
    pub x2: f64,
    /// Bottom edge
    pub y2: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box width.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Box height.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Whether the corners are ordered (x1 <= x2, y1 <= y2).
    pub fn is_well_formed(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// A line of text as produced by the extraction step.
///
/// Lines are immutable once extracted; their order within a page is the
/// reading order and drives the alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Line content
    pub text: String,

    /// Left edge
    pub x1: f64,

    /// Top edge
    pub y1: f64,

    /// Right edge
    pub x2: f64,

    /// Bottom edge
    pub y2: f64,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Recognition confidence reported by the extractor, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TextLine {
    /// Create a new text line.
    pub fn new(text: impl Into<String>, bbox: BoundingBox, page_number: u32) -> Self {
        Self {
            text: text.into(),
            x1: bbox.x1,
            y1: bbox.y1,
            x2: bbox.x2,
            y2: bbox.y2,
            page_number,
            confidence: None,
        }
    }

    /// Set the recognition confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Copy of this line's bounding box.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.x1, self.y1, self.x2, self.y2)
    }
}

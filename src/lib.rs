//! # pagediff
//!
//! Line-level differences between two versions of a paged document.
//!
//! Each page is given as an ordered list of text lines with bounding boxes,
//! as produced by an OCR or PDF text-extraction step. The library aligns the
//! lines of corresponding pages, classifies every change as added, removed
//! or modified, and reports the boxes involved so the changes can be
//! highlighted on the page images.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagediff::{compare_files, render};
//!
//! fn main() -> pagediff::Result<()> {
//!     // Pages extracted from both versions, stored as JSON
//!     let response = compare_files("old.json", "new.json")?;
//!
//!     let json = render::to_json(&response, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How lines are matched
//!
//! - Lines are aligned by text with a longest-matching-block sequence
//!   matcher; geometry is carried through but never used for matching.
//! - Runs present on one side only become `removed` or `added`.
//! - Runs where both sides changed are paired greedily by character
//!   similarity; pairs at or above the threshold (default 0.6) become
//!   `modified`.
//! - Pages are independent and compared in parallel with Rayon.

pub mod compare;
pub mod diff;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use compare::{CompareLimits, Comparison};
pub use diff::{similarity_ratio, DiffDetector, DiffOptions, DEFAULT_SIMILARITY_THRESHOLD};
pub use error::{Error, Result};
pub use model::{
    BoundingBox, CompareResponse, DiffItem, DiffType, PageContent, PageDiff, PageMap, TextLine,
};
pub use render::{DiffSummary, JsonFormat};
pub use source::{load_pages, JsonPageSource, PageSource};

use std::path::Path;

/// Compare two documents with the default detector.
///
/// # Arguments
///
/// * `old_pages` - Extracted pages of the old version
/// * `new_pages` - Extracted pages of the new version
///
/// # Returns
///
/// One [`PageDiff`] per changed page, in ascending page order.
pub fn detect_diffs(old_pages: &PageMap, new_pages: &PageMap) -> Vec<PageDiff> {
    DiffDetector::new().detect_diffs(old_pages, new_pages)
}

/// Compare two JSON page files with default limits and threshold.
///
/// # Example
///
/// ```no_run
/// use pagediff::compare_files;
///
/// let response = compare_files("old.json", "new.json").unwrap();
/// println!("Changed pages: {}", response.pages.len());
/// ```
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
    old_path: P,
    new_path: Q,
) -> Result<CompareResponse> {
    let comparison = Comparison::new();
    let old = comparison.json_source(old_path.as_ref(), "old");
    let new = comparison.json_source(new_path.as_ref(), "new");
    comparison.compare_sources(&old, &new)
}

/// Builder for a configured comparison.
///
/// # Example
///
/// ```no_run
/// use pagediff::PageDiffer;
///
/// let response = PageDiffer::new()
///     .with_threshold(0.75)
///     .with_max_pages(100)
///     .sequential()
///     .compare_files("old.json", "new.json")?;
/// # Ok::<(), pagediff::Error>(())
/// ```
pub struct PageDiffer {
    options: DiffOptions,
    limits: CompareLimits,
}

impl PageDiffer {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            options: DiffOptions::default(),
            limits: CompareLimits::default(),
        }
    }

    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.options = self.options.with_threshold(threshold);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the maximum page count per document.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.limits = self.limits.with_max_pages(max_pages);
        self
    }

    /// Set the maximum input size per document.
    pub fn with_max_input_bytes(mut self, max: u64) -> Self {
        self.limits = self.limits.with_max_input_bytes(max);
        self
    }

    /// Build the comparison, validating the options.
    pub fn build(self) -> Result<Comparison> {
        let detector = DiffDetector::with_options(self.options)?;
        Ok(Comparison::new()
            .with_detector(detector)
            .with_limits(self.limits))
    }

    /// Compare two loaded documents.
    pub fn compare(self, old_pages: &PageMap, new_pages: &PageMap) -> Result<CompareResponse> {
        self.build()?.compare(old_pages, new_pages)
    }

    /// Compare two JSON page files.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        old_path: P,
        new_path: Q,
    ) -> Result<CompareResponse> {
        let comparison = self.build()?;
        let old = comparison.json_source(old_path.as_ref(), "old");
        let new = comparison.json_source(new_path.as_ref(), "new");
        comparison.compare_sources(&old, &new)
    }
}

impl Default for PageDiffer {
    fn default() -> Self {
        Self::new()
    }
}

//! Request-level comparison with input limits.
//!
//! [`Comparison`] wraps a [`DiffDetector`] with the checks a service puts
//! in front of it: page-count and input-size limits, and the page counts
//! reported alongside the diff.
//!
//! # Example
//!
//! ```no_run
//! use pagediff::compare::{CompareLimits, Comparison};
//!
//! fn main() -> pagediff::Result<()> {
//!     let comparison = Comparison::new().with_limits(CompareLimits::new().with_max_pages(10));
//!     let old = comparison.json_source("old.json", "old");
//!     let new = comparison.json_source("new.json", "new");
//!
//!     let response = comparison.compare_sources(&old, &new)?;
//!     println!("{} pages changed", response.pages.len());
//!     Ok(())
//! }
//! ```

use crate::diff::DiffDetector;
use crate::error::{Error, Result};
use crate::model::{CompareResponse, PageMap};
use crate::source::{JsonPageSource, PageSource, DEFAULT_MAX_INPUT_BYTES};
use std::path::PathBuf;

/// Default maximum pages per document.
pub const DEFAULT_MAX_PAGES: usize = 50;

/// Limits applied before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareLimits {
    /// Maximum pages per document
    pub max_pages: usize,

    /// Maximum size of a serialized input, in bytes
    pub max_input_bytes: u64,
}

impl CompareLimits {
    /// Create limits with defaults (50 pages, 20 MiB).
    pub fn new() -> Self {
        Self::default()
    }

    /// No limits at all.
    pub fn unlimited() -> Self {
        Self {
            max_pages: usize::MAX,
            max_input_bytes: u64::MAX,
        }
    }

    /// Set the maximum page count.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the maximum input size.
    pub fn with_max_input_bytes(mut self, max: u64) -> Self {
        self.max_input_bytes = max;
        self
    }

    fn check_pages(&self, document: &str, pages: &PageMap) -> Result<()> {
        if pages.len() > self.max_pages {
            return Err(Error::TooManyPages {
                document: document.to_string(),
                count: pages.len(),
                max: self.max_pages,
            });
        }
        Ok(())
    }
}

impl Default for CompareLimits {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// A configured comparison of two documents.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    detector: DiffDetector,
    limits: CompareLimits,
}

impl Comparison {
    /// Create a comparison with the default detector and limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom detector.
    pub fn with_detector(mut self, detector: DiffDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Use custom limits.
    pub fn with_limits(mut self, limits: CompareLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The detector in use.
    pub fn detector(&self) -> &DiffDetector {
        &self.detector
    }

    /// The limits in use.
    pub fn limits(&self) -> &CompareLimits {
        &self.limits
    }

    /// A JSON file source that honors this comparison's size limit.
    pub fn json_source(&self, path: impl Into<PathBuf>, label: &str) -> JsonPageSource {
        JsonPageSource::from_path(path)
            .with_label(label)
            .with_max_bytes(self.limits.max_input_bytes)
    }

    /// Compare two already loaded documents.
    pub fn compare(&self, old_pages: &PageMap, new_pages: &PageMap) -> Result<CompareResponse> {
        self.limits.check_pages("old", old_pages)?;
        self.limits.check_pages("new", new_pages)?;

        let pages = self.detector.detect_diffs(old_pages, new_pages);
        log::debug!("{} of the pages changed", pages.len());

        Ok(CompareResponse {
            pages,
            old_page_count: old_pages.len(),
            new_page_count: new_pages.len(),
        })
    }

    /// Load both documents from their sources, then compare.
    pub fn compare_sources(
        &self,
        old: &dyn PageSource,
        new: &dyn PageSource,
    ) -> Result<CompareResponse> {
        log::debug!("Loading {} and {}", old.label(), new.label());
        let old_pages = old.load()?;
        let new_pages = new.load()?;
        self.compare(&old_pages, &new_pages)
    }
}

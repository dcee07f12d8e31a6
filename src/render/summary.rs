//! Counts of changes in a comparison result.

use crate::model::{CompareResponse, DiffType, PageDiff};
use serde::{Deserialize, Serialize};

/// Statistics over a comparison result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Number of pages with at least one difference
    pub pages_changed: usize,

    /// Number of added lines
    pub added: usize,

    /// Number of removed lines
    pub removed: usize,

    /// Number of modified lines
    pub modified: usize,
}

impl DiffSummary {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize a single page.
    pub fn from_page(page: &PageDiff) -> Self {
        let mut summary = Self::new();
        if !page.is_empty() {
            summary.pages_changed = 1;
        }
        for item in &page.diffs {
            summary.count(item.diff_type);
        }
        summary
    }

    /// Summarize a full result.
    pub fn from_response(response: &CompareResponse) -> Self {
        let mut summary = Self::new();
        for page in &response.pages {
            summary.merge(&Self::from_page(page));
        }
        summary
    }

    /// Increment the counter for one item.
    pub fn count(&mut self, diff_type: DiffType) {
        match diff_type {
            DiffType::Added => self.added += 1,
            DiffType::Removed => self.removed += 1,
            DiffType::Modified => self.modified += 1,
        }
    }

    /// Total number of differences.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }

    /// Merge another summary into this one.
    pub fn merge(&mut self, other: &DiffSummary) {
        self.pages_changed += other.pages_changed;
        self.added += other.added;
        self.removed += other.removed;
        self.modified += other.modified;
    }
}

impl CompareResponse {
    /// Summarize this result.
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_response(self)
    }
}

//! Diff output types.

use super::{BoundingBox, TextLine};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    /// Line exists only in the new document
    Added,
    /// Line exists only in the old document
    Removed,
    /// Line was changed between the documents
    Modified,
}

impl DiffType {
    /// Lowercase name as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffType::Added => "added",
            DiffType::Removed => "removed",
            DiffType::Modified => "modified",
        }
    }
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single change with the text and boxes of the lines involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffItem {
    /// Kind of change
    #[serde(rename = "type")]
    pub diff_type: DiffType,

    /// Old line text (removed and modified)
    pub old_text: Option<String>,

    /// New line text (added and modified)
    pub new_text: Option<String>,

    /// Box of the old line, if one participated
    #[serde(default)]
    pub old_bboxes: Vec<BoundingBox>,

    /// Box of the new line, if one participated
    #[serde(default)]
    pub new_bboxes: Vec<BoundingBox>,
}

impl DiffItem {
    /// Build an item from whichever sides are present.
    ///
    /// The caller guarantees that `diff_type` agrees with the sides given.
    pub fn new(diff_type: DiffType, old: Option<&TextLine>, new: Option<&TextLine>) -> Self {
        Self {
            diff_type,
            old_text: old.map(|l| l.text.clone()),
            new_text: new.map(|l| l.text.clone()),
            old_bboxes: old.map(TextLine::bbox).into_iter().collect(),
            new_bboxes: new.map(TextLine::bbox).into_iter().collect(),
        }
    }

    /// A line present only in the new document.
    pub fn added(new: &TextLine) -> Self {
        Self::new(DiffType::Added, None, Some(new))
    }

    /// A line present only in the old document.
    pub fn removed(old: &TextLine) -> Self {
        Self::new(DiffType::Removed, Some(old), None)
    }

    /// An old line paired with its changed counterpart.
    pub fn modified(old: &TextLine, new: &TextLine) -> Self {
        Self::new(DiffType::Modified, Some(old), Some(new))
    }

    pub fn is_added(&self) -> bool {
        self.diff_type == DiffType::Added
    }

    pub fn is_removed(&self) -> bool {
        self.diff_type == DiffType::Removed
    }

    pub fn is_modified(&self) -> bool {
        self.diff_type == DiffType::Modified
    }
}

/// All differences found on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDiff {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Differences in alignment order
    pub diffs: Vec<DiffItem>,

    /// Page width (new page preferred)
    pub width: f64,

    /// Page height (new page preferred)
    pub height: f64,
}

impl PageDiff {
    /// Number of differences on the page.
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    /// Check if the page has no differences.
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Iterate over differences of one kind.
    pub fn of_type(&self, diff_type: DiffType) -> impl Iterator<Item = &DiffItem> {
        self.diffs.iter().filter(move |d| d.diff_type == diff_type)
    }
}

/// Result of comparing two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    /// Changed pages in ascending page order
    pub pages: Vec<PageDiff>,

    /// Number of pages in the old document
    pub old_page_count: usize,

    /// Number of pages in the new document
    pub new_page_count: usize,
}

impl CompareResponse {
    /// Check if the documents had no differences.
    pub fn is_identical(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up the diff for a page.
    pub fn page(&self, page_number: u32) -> Option<&PageDiff> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }
}

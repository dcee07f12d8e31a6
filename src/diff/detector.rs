//! Page-by-page difference detection.

use super::matcher::pair_replaced_lines;
use super::options::DiffOptions;
use super::sequence::{SequenceMatcher, Tag};
use crate::error::Result;
use crate::model::{DiffItem, PageContent, PageDiff, PageMap, TextLine};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Detects line-level differences between two versions of a document.
///
/// The detector holds only immutable configuration and can be shared
/// freely across threads.
///
/// # Example
///
/// ```
/// use pagediff::{BoundingBox, DiffDetector, DiffType, PageContent, PageMap};
///
/// let bbox = BoundingBox::new(10.0, 10.0, 90.0, 20.0);
/// let mut old = PageMap::new();
/// old.insert(1, PageContent::new(1, 100.0, 100.0).with_text("Line 1", bbox));
/// let mut new = PageMap::new();
/// new.insert(
///     1,
///     PageContent::new(1, 100.0, 100.0)
///         .with_text("Line 1", bbox)
///         .with_text("Line 2 (new)", bbox),
/// );
///
/// let diffs = DiffDetector::new().detect_diffs(&old, &new);
/// assert_eq!(diffs.len(), 1);
/// assert_eq!(diffs[0].diffs[0].diff_type, DiffType::Added);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiffDetector {
    options: DiffOptions,
}

impl DiffDetector {
    /// Create a detector with the default threshold (0.6).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom similarity threshold.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        Self::with_options(DiffOptions::new().with_threshold(threshold))
    }

    /// Create a detector from options.
    pub fn with_options(options: DiffOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The similarity threshold for `modified` pairings.
    pub fn threshold(&self) -> f64 {
        self.options.similarity_threshold
    }

    /// The detector options.
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two documents.
    ///
    /// Returns one [`PageDiff`] per changed page, in ascending page order
    /// over the union of both documents' pages. Unchanged pages are left
    /// out entirely.
    pub fn detect_diffs(&self, old_pages: &PageMap, new_pages: &PageMap) -> Vec<PageDiff> {
        let page_numbers: Vec<u32> = old_pages
            .keys()
            .chain(new_pages.keys())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        log::debug!(
            "Comparing {} old and {} new pages ({} distinct)",
            old_pages.len(),
            new_pages.len(),
            page_numbers.len()
        );

        let diff_page =
            |&n: &u32| self.diff_page(n, old_pages.get(&n), new_pages.get(&n));

        let results: Vec<Option<PageDiff>> = if self.options.parallel {
            page_numbers.par_iter().map(diff_page).collect()
        } else {
            page_numbers.iter().map(diff_page).collect()
        };

        results.into_iter().flatten().collect()
    }

    /// Compare one page, given whichever versions exist.
    ///
    /// Returns `None` when the page is unchanged. Dimensions come from the
    /// new page when present, otherwise from the old one.
    pub fn diff_page(
        &self,
        page_number: u32,
        old_page: Option<&PageContent>,
        new_page: Option<&PageContent>,
    ) -> Option<PageDiff> {
        let page = new_page.or(old_page)?;
        let diffs = self.compare_pages(old_page, new_page);
        log::debug!("Page {}: {} differences", page_number, diffs.len());

        if diffs.is_empty() {
            return None;
        }

        Some(PageDiff {
            page_number,
            diffs,
            width: page.width,
            height: page.height,
        })
    }

    /// Differences between two versions of a page.
    pub fn compare_pages(
        &self,
        old_page: Option<&PageContent>,
        new_page: Option<&PageContent>,
    ) -> Vec<DiffItem> {
        match (old_page, new_page) {
            (None, None) => Vec::new(),
            (None, Some(new)) => new.lines.iter().map(DiffItem::added).collect(),
            (Some(old), None) => old.lines.iter().map(DiffItem::removed).collect(),
            (Some(old), Some(new)) => self.diff_lines(&old.lines, &new.lines),
        }
    }

    /// Align two line sequences by text and classify every unequal run.
    pub fn diff_lines(&self, old_lines: &[TextLine], new_lines: &[TextLine]) -> Vec<DiffItem> {
        let old_texts: Vec<&str> = old_lines.iter().map(|l| l.text.as_str()).collect();
        let new_texts: Vec<&str> = new_lines.iter().map(|l| l.text.as_str()).collect();

        let opcodes = SequenceMatcher::new(&old_texts, &new_texts).opcodes();
        log::trace!("{} alignment runs", opcodes.len());

        let mut diffs = Vec::new();
        for op in opcodes {
            match op.tag {
                Tag::Equal => {}
                Tag::Delete => {
                    diffs.extend(old_lines[op.old_range()].iter().map(DiffItem::removed));
                }
                Tag::Insert => {
                    diffs.extend(new_lines[op.new_range()].iter().map(DiffItem::added));
                }
                Tag::Replace => {
                    diffs.extend(pair_replaced_lines(
                        &old_lines[op.old_range()],
                        &new_lines[op.new_range()],
                        self.options.similarity_threshold,
                    ));
                }
            }
        }

        diffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{BoundingBox, DiffType};

    fn page(number: u32, texts: &[&str]) -> PageContent {
        let mut page = PageContent::new(number, 100.0, 100.0);
        for (i, text) in texts.iter().enumerate() {
            let y = 10.0 + i as f64 * 20.0;
            page.push_text(*text, BoundingBox::new(10.0, y, 90.0, y + 10.0));
        }
        page
    }

    fn kinds(diffs: &[DiffItem]) -> Vec<DiffType> {
        diffs.iter().map(|d| d.diff_type).collect()
    }

    #[test]
    fn test_detector_construction() {
        assert_eq!(DiffDetector::new().threshold(), 0.6);
        assert_eq!(DiffDetector::with_threshold(0.9).unwrap().threshold(), 0.9);
        assert!(matches!(
            DiffDetector::with_threshold(0.0),
            Err(Error::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_compare_missing_pages() {
        let detector = DiffDetector::new();
        let p = page(1, &["a", "b"]);

        assert_eq!(
            kinds(&detector.compare_pages(None, Some(&p))),
            vec![DiffType::Added, DiffType::Added]
        );
        assert_eq!(
            kinds(&detector.compare_pages(Some(&p), None)),
            vec![DiffType::Removed, DiffType::Removed]
        );
        assert!(detector.compare_pages(None, None).is_empty());
    }

    #[test]
    fn test_diff_lines_run_order() {
        let detector = DiffDetector::new();
        let old = page(1, &["Title", "Price: 100 USD", "Footer", "Old note"]);
        let new = page(1, &["Intro", "Title", "Price: 120 USD", "Footer"]);
        let diffs = detector.diff_lines(&old.lines, &new.lines);

        assert_eq!(
            kinds(&diffs),
            vec![DiffType::Added, DiffType::Modified, DiffType::Removed]
        );
        assert_eq!(diffs[0].new_text.as_deref(), Some("Intro"));
        assert_eq!(diffs[1].old_text.as_deref(), Some("Price: 100 USD"));
        assert_eq!(diffs[1].new_text.as_deref(), Some("Price: 120 USD"));
        assert_eq!(diffs[2].old_text.as_deref(), Some("Old note"));
    }

    #[test]
    fn test_diff_page_prefers_new_dimensions() {
        let detector = DiffDetector::new();
        let old = page(1, &["a"]);
        let mut new = page(1, &["b"]);
        new.width = 200.0;
        new.height = 300.0;

        let diff = detector.diff_page(1, Some(&old), Some(&new)).unwrap();
        assert_eq!((diff.width, diff.height), (200.0, 300.0));

        let diff = detector.diff_page(1, Some(&old), None).unwrap();
        assert_eq!((diff.width, diff.height), (100.0, 100.0));
    }

    #[test]
    fn test_diff_page_unchanged_is_none() {
        let detector = DiffDetector::new();
        let p = page(1, &["same"]);
        assert!(detector.diff_page(1, Some(&p), Some(&p)).is_none());
        assert!(detector.diff_page(1, None, None).is_none());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut old = PageMap::new();
        let mut new = PageMap::new();
        for n in 1..=8 {
            old.insert(n, page(n, &["header", "body text one", "footer"]));
            if n % 2 == 0 {
                new.insert(n, page(n, &["header", "body text two", "footer", "extra"]));
            } else {
                new.insert(n, page(n, &["header", "body text one", "footer"]));
            }
        }

        let parallel = DiffDetector::new().detect_diffs(&old, &new);
        let sequential = DiffDetector::with_options(DiffOptions::new().sequential())
            .unwrap()
            .detect_diffs(&old, &new);

        assert_eq!(parallel, sequential);
        let numbers: Vec<u32> = parallel.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![2, 4, 6, 8]);
    }
}

//! Integration tests for page-level difference detection.

use pagediff::{
    similarity_ratio, BoundingBox, DiffDetector, DiffOptions, DiffType, PageContent, PageMap,
};

fn bbox(y: f64) -> BoundingBox {
    BoundingBox::new(10.0, y, 90.0, y + 10.0)
}

fn page(number: u32, texts: &[&str]) -> PageContent {
    let mut page = PageContent::new(number, 100.0, 100.0);
    for (i, text) in texts.iter().enumerate() {
        page.push_text(*text, bbox(10.0 + i as f64 * 20.0));
    }
    page
}

fn doc(pages: Vec<PageContent>) -> PageMap {
    pages.into_iter().map(|p| (p.page_number, p)).collect()
}

#[test]
fn test_identical_pages() {
    let old = doc(vec![page(1, &["Hello World"])]);
    let new = doc(vec![page(1, &["Hello World"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert!(result.is_empty());
}

#[test]
fn test_added_line() {
    let old = doc(vec![page(1, &["Line 1"])]);
    let new = doc(vec![page(1, &["Line 1", "Line 2 (new)"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].diffs.len(), 1);
    assert_eq!(result[0].diffs[0].diff_type, DiffType::Added);
    assert_eq!(result[0].diffs[0].new_text.as_deref(), Some("Line 2 (new)"));
}

#[test]
fn test_removed_line() {
    let old = doc(vec![page(1, &["Line 1", "Line 2 (old)"])]);
    let new = doc(vec![page(1, &["Line 1"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].diffs.len(), 1);
    assert_eq!(result[0].diffs[0].diff_type, DiffType::Removed);
    assert_eq!(result[0].diffs[0].old_text.as_deref(), Some("Line 2 (old)"));
}

#[test]
fn test_modified_line() {
    let old = doc(vec![page(1, &["Hello World version 1"])]);
    let new = doc(vec![page(1, &["Hello World version 2"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].diffs.len(), 1);

    let item = &result[0].diffs[0];
    assert_eq!(item.diff_type, DiffType::Modified);
    assert_eq!(item.old_text.as_deref(), Some("Hello World version 1"));
    assert_eq!(item.new_text.as_deref(), Some("Hello World version 2"));
    assert!(similarity_ratio("Hello World version 1", "Hello World version 2") >= 0.6);
}

#[test]
fn test_new_page() {
    let old = doc(vec![page(1, &["Page 1 content"])]);
    let new = doc(vec![
        page(1, &["Page 1 content"]),
        page(2, &["Page 2 content"]),
    ]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].page_number, 2);
    assert!(result[0].diffs.iter().all(|d| d.is_added()));
}

#[test]
fn test_empty_documents() {
    let result = DiffDetector::new().detect_diffs(&PageMap::new(), &PageMap::new());
    assert!(result.is_empty());
}

#[test]
fn test_bounding_box_in_diff_item() {
    let mut old_page = PageContent::new(1, 100.0, 100.0);
    old_page.push_text("Old text", BoundingBox::new(10.0, 20.0, 80.0, 35.0));
    let old = doc(vec![old_page]);
    let new = doc(vec![PageContent::new(1, 100.0, 100.0)]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);

    let diff = &result[0].diffs[0];
    assert_eq!(diff.diff_type, DiffType::Removed);
    assert_eq!(diff.old_bboxes, vec![BoundingBox::new(10.0, 20.0, 80.0, 35.0)]);
    assert!(diff.new_bboxes.is_empty());
}

#[test]
fn test_old_only_page_is_all_removed() {
    let old = doc(vec![page(1, &["a"]), page(3, &["x", "y", "z"])]);
    let new = doc(vec![page(1, &["a"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].page_number, 3);
    assert_eq!(result[0].diffs.len(), 3);
    assert!(result[0].diffs.iter().all(|d| d.is_removed()));
}

#[test]
fn test_pages_ascending_across_union() {
    let old = doc(vec![page(5, &["five"]), page(2, &["two"])]);
    let new = doc(vec![page(4, &["four"]), page(1, &["one"]), page(2, &["two!"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    let numbers: Vec<u32> = result.iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, vec![1, 2, 4, 5]);
}

#[test]
fn test_unchanged_pages_absent() {
    let old = doc(vec![page(1, &["same"]), page(2, &["old"]), page(3, &["same"])]);
    let new = doc(vec![page(1, &["same"]), page(2, &["new"]), page(3, &["same"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].page_number, 2);
    assert!(result.iter().all(|p| !p.diffs.is_empty()));
}

#[test]
fn test_item_invariants() {
    let old = doc(vec![page(
        1,
        &["Invoice 2023-001", "Customer: ACME", "Total: 100", "Thanks"],
    )]);
    let new = doc(vec![page(
        1,
        &["Invoice 2024-001", "Customer: ACME", "Subtotal: 90", "Tax: 10", "Thanks"],
    )]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    for item in result.iter().flat_map(|p| &p.diffs) {
        assert!(item.old_text.is_some() || item.new_text.is_some());
        match item.diff_type {
            DiffType::Added => {
                assert!(item.old_text.is_none());
                assert!(item.old_bboxes.is_empty());
                assert_eq!(item.new_bboxes.len(), 1);
            }
            DiffType::Removed => {
                assert!(item.new_text.is_none());
                assert!(item.new_bboxes.is_empty());
                assert_eq!(item.old_bboxes.len(), 1);
            }
            DiffType::Modified => {
                assert!(item.old_text.is_some() && item.new_text.is_some());
                assert_eq!(item.old_bboxes.len(), 1);
                assert_eq!(item.new_bboxes.len(), 1);
            }
        }
    }
}

#[test]
fn test_modified_items_meet_threshold() {
    let detector = DiffDetector::with_threshold(0.7).unwrap();
    let old = doc(vec![page(
        1,
        &["Header", "Meeting on Monday at 10", "Room 4B", "Signed: J. Doe"],
    )]);
    let new = doc(vec![page(
        1,
        &["Header", "Meeting on Tuesday at 11", "Building C", "Signed: J. Doe"],
    )]);

    let result = detector.detect_diffs(&old, &new);
    let modified: Vec<_> = result
        .iter()
        .flat_map(|p| &p.diffs)
        .filter(|d| d.is_modified())
        .collect();

    assert!(!modified.is_empty());
    for item in modified {
        let old = item.old_text.as_deref().unwrap();
        let new = item.new_text.as_deref().unwrap();
        assert!(similarity_ratio(old, new) >= detector.threshold());
    }
}

#[test]
fn test_replace_run_order() {
    let old = doc(vec![page(1, &["start", "alpha beta", "unrelated text", "end"])]);
    let new = doc(vec![page(1, &["start", "qqq", "alpha betb", "end"])]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    let kinds: Vec<DiffType> = result[0].diffs.iter().map(|d| d.diff_type).collect();
    assert_eq!(
        kinds,
        vec![DiffType::Modified, DiffType::Removed, DiffType::Added]
    );
    assert_eq!(result[0].diffs[2].new_text.as_deref(), Some("qqq"));
}

#[test]
fn test_dimensions_from_new_page() {
    let old = doc(vec![PageContent::new(1, 100.0, 100.0).with_text("a", bbox(0.0))]);
    let new = doc(vec![PageContent::new(1, 612.0, 792.0).with_text("b", bbox(0.0))]);

    let result = DiffDetector::new().detect_diffs(&old, &new);
    assert_eq!(result[0].width, 612.0);
    assert_eq!(result[0].height, 792.0);
}

#[test]
fn test_sequential_and_parallel_agree() {
    let old: PageMap = (1..=20)
        .map(|n| {
            let label = format!("page {}", n);
            (n, page(n, &["title", "body", label.as_str()]))
        })
        .collect();
    let new: PageMap = (3..=22)
        .map(|n| {
            let label = format!("page {}", n);
            (n, page(n, &["title", "body changed", label.as_str()]))
        })
        .collect();

    let parallel = DiffDetector::new().detect_diffs(&old, &new);
    let sequential = DiffDetector::with_options(DiffOptions::new().sequential())
        .unwrap()
        .detect_diffs(&old, &new);

    assert_eq!(parallel, sequential);
    assert_eq!(parallel.len(), 22);
}

//! Plain text report.

use crate::model::{CompareResponse, DiffItem, DiffType};
use std::fmt::Write;

/// Render a comparison result as a line-oriented report.
///
/// ```text
/// Page 2 (612 x 792)
///   + Added line
///   - Removed line
///   ~ Old wording -> New wording
///
/// 1 page changed: 1 added, 1 removed, 1 modified
/// ```
pub fn to_text(response: &CompareResponse) -> String {
    let mut out = String::new();

    for page in &response.pages {
        let _ = writeln!(
            out,
            "Page {} ({} x {})",
            page.page_number, page.width, page.height
        );
        for item in &page.diffs {
            let _ = writeln!(out, "  {}", format_item(item));
        }
        out.push('\n');
    }

    let summary = response.summary();
    if summary.total() == 0 {
        out.push_str("No differences\n");
    } else {
        let _ = writeln!(
            out,
            "{} page{} changed: {} added, {} removed, {} modified",
            summary.pages_changed,
            if summary.pages_changed == 1 { "" } else { "s" },
            summary.added,
            summary.removed,
            summary.modified
        );
    }

    out
}

/// One-line form of a diff item.
pub fn format_item(item: &DiffItem) -> String {
    let old = item.old_text.as_deref().unwrap_or_default();
    let new = item.new_text.as_deref().unwrap_or_default();
    match item.diff_type {
        DiffType::Added => format!("+ {}", new),
        DiffType::Removed => format!("- {}", old),
        DiffType::Modified => format!("~ {} -> {}", old, new),
    }
}

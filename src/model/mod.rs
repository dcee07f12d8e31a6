//! Data model for extracted pages and their differences.
//!
//! Input types ([`TextLine`], [`PageContent`]) come from the extraction
//! step and are never mutated here. Output types ([`DiffItem`],
//! [`PageDiff`], [`CompareResponse`]) serialize directly to the JSON
//! interchange format.

mod diff;
mod line;
mod page;

pub use diff::{CompareResponse, DiffItem, DiffType, PageDiff};
pub use line::{BoundingBox, TextLine};
pub use page::{PageContent, PageMap};

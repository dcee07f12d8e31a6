//! Difference detection between two versions of a paged document.
//!
//! Lines on each page are aligned by their text with a longest-matching-block
//! sequence matcher. Unequal runs become `removed`/`added` items; runs where
//! both sides changed are paired greedily by character similarity.
//! Geometry is carried through to the output but never used for matching.

mod detector;
mod matcher;
mod options;
pub mod sequence;
mod similarity;

pub use detector::DiffDetector;
pub use matcher::pair_replaced_lines;
pub use options::{DiffOptions, DEFAULT_SIMILARITY_THRESHOLD};
pub use sequence::{Match, Opcode, SequenceMatcher, Tag};
pub use similarity::similarity_ratio;

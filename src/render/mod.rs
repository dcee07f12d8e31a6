//! Rendering module for converting comparison results to output formats.

mod json;
mod summary;
mod text;

pub use json::{to_json, JsonFormat};
pub use summary::DiffSummary;
pub use text::{format_item, to_text};

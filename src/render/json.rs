//! JSON rendering for comparison results.

use crate::error::{Error, Result};
use crate::model::CompareResponse;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a comparison result to JSON.
pub fn to_json(response: &CompareResponse, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(response),
        JsonFormat::Compact => serde_json::to_string(response),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

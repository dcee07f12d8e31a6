//! Error types for pagediff library.

use std::io;
use thiserror::Error;

/// Result type alias for pagediff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around a comparison.
///
/// The diff core itself never fails; these cover configuration, input
/// loading, request limits and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Extracted page data could not be decoded.
    #[error("Invalid page data: {0}")]
    Json(String),

    /// Similarity threshold outside of (0.0, 1.0].
    #[error("Invalid similarity threshold {0}: must be in (0.0, 1.0]")]
    InvalidThreshold(f64),

    /// A page record violates the input contract.
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// A document has more pages than allowed.
    #[error("{document} exceeds maximum page count of {max} (has {count})")]
    TooManyPages {
        /// Which document ("old" or "new")
        document: String,
        /// Number of pages found
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// An input file is larger than allowed.
    #[error("{document} exceeds maximum input size of {max} bytes (has {size})")]
    InputTooLarge {
        /// Which document ("old" or "new")
        document: String,
        /// Input size in bytes
        size: u64,
        /// Configured maximum
        max: u64,
    },

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

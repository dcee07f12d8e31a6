//! Detector configuration.

use crate::error::{Error, Result};

/// Minimum similarity for pairing two lines as `modified`.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Options for a [`DiffDetector`](super::DiffDetector).
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOptions {
    /// Minimum similarity ratio for a `modified` pairing, in (0.0, 1.0]
    pub similarity_threshold: f64,

    /// Whether to compare pages in parallel
    pub parallel: bool,
}

impl DiffOptions {
    /// Create new diff options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity threshold.
    ///
    /// Lower values pair more lines as `modified`, at the cost of pairing
    /// dissimilar ones.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> Result<()> {
        let t = self.similarity_threshold;
        // NaN fails both comparisons
        if t > 0.0 && t <= 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidThreshold(t))
        }
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            parallel: true,
        }
    }
}

//! Result of a normalization run.

use serde::Serialize;

use super::Dimensions;
use crate::error::Result;

/// The output of the normalization pipeline.
///
/// On success, `markup` holds the twice-optimized document with fixed sizing
/// stripped, and `dimensions` is always set. When optimization fails, the
/// pipeline degrades gracefully: `markup` is the original input byte-for-byte,
/// `optimized` is `false`, and `dimensions` carries whatever could be
/// determined before the failing step (possibly nothing).
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeOutcome {
    /// The markup to persist.
    pub markup: String,

    /// Final scale-fitted dimensions.
    pub dimensions: Option<Dimensions>,

    /// Byte length of `markup`.
    pub byte_size: usize,

    /// Whether both optimization passes completed.
    pub optimized: bool,
}

impl NormalizeOutcome {
    /// Dimensions, or the given fallback when none were determinable.
    pub fn dimensions_or(&self, fallback: Dimensions) -> Dimensions {
        self.dimensions.unwrap_or(fallback)
    }

    /// Serialize the outcome report as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the outcome report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

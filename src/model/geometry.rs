//! Geometric primitives used by extraction and scaling.

use serde::{Deserialize, Serialize};

/// Width and height declared by the document itself.
///
/// Recovered from explicit `width`/`height` attributes, falling back to the
/// `viewBox` span. Either value may be absent; absence is a normal outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeclaredSize {
    /// Declared width, if any.
    pub width: Option<f64>,
    /// Declared height, if any.
    pub height: Option<f64>,
}

impl DeclaredSize {
    /// A size with neither dimension known.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a size with both dimensions known.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Both dimensions as a pair, or `None` if either is missing.
    pub fn pair(&self) -> Option<(f64, f64)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    /// Whether both dimensions are known.
    pub fn is_complete(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}

/// An axis-aligned rectangle in document coordinates.
///
/// Produced either from a `viewBox` declaration or from a content scan with
/// padding applied. Whenever a `BoundsRect` is returned, `width` and `height`
/// are positive; callers receive `None` instead of a degenerate rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl BoundsRect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle has positive, finite area.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Final integer output dimensions after scale-fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Output width in user units.
    pub width: u32,
    /// Output height in user units.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square of the given side length.
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

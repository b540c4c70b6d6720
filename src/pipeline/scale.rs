//! Scale-fit policy.
//!
//! Resizes a determined bounding box into the configured min/max range while
//! preserving aspect ratio: oversized boxes are scaled so their longer side
//! equals the maximum; boxes with BOTH sides under the minimum are scaled so
//! their shorter side reaches it. Boxes already in range pass through with
//! rounding only.

use crate::model::Dimensions;

use super::NormalizeOptions;

/// Fit a width/height pair into the configured range.
///
/// Non-finite or non-positive inputs yield the default square
/// (`min_dimension` per side).
///
/// # Example
///
/// ```
/// use svgnorm::pipeline::{scale_fit, NormalizeOptions};
///
/// let dims = scale_fit(5000.0, 2000.0, &NormalizeOptions::default());
/// assert_eq!((dims.width, dims.height), (1000, 400));
/// ```
pub fn scale_fit(width: f64, height: f64, options: &NormalizeOptions) -> Dimensions {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Dimensions::square(options.min_dimension);
    }

    let max = f64::from(options.max_dimension);
    let min = f64::from(options.min_dimension);

    let (mut w, mut h) = (width, height);
    if w > max || h > max {
        let scale = max / w.max(h);
        w *= scale;
        h *= scale;
    } else if w < min && h < min {
        let scale = min / w.min(h);
        w *= scale;
        h *= scale;
    }

    Dimensions::new(round_side(w), round_side(h))
}

fn round_side(side: f64) -> u32 {
    (side.round() as u32).max(1)
}

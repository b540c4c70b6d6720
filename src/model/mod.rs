//! Data model for SVG normalization.

mod geometry;
mod outcome;

pub use geometry::{BoundsRect, DeclaredSize, Dimensions};
pub use outcome::NormalizeOutcome;

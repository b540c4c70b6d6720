//! Dimension and content-bounds extraction.

mod bounds;
mod dimensions;
mod path_data;

pub use bounds::{bounds_of_optimized, content_bounds};
pub use dimensions::extract_dimensions;
pub use path_data::coordinate_pairs;

pub(crate) use dimensions::{parse_view_box, svg_root};

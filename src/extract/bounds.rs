//! Content bounds estimation.
//!
//! Computes a bounding box from the drawable primitives actually present in
//! the document, as distinct from its declared canvas size. Rectangles and
//! circles contribute true extents; path data contributes raw coordinate
//! pairs (see [`coordinate_pairs`]), which may overestimate curves.

use roxmltree::{Document, Node};

use super::path_data::coordinate_pairs;
use super::{parse_view_box, svg_root};
use crate::model::BoundsRect;

/// Estimate content bounds from a geometry scan.
///
/// Walks every `<rect>`, `<circle>`, and `<path>` outside `<defs>`, tracking
/// min/max extents, then pads every side by `padding_ratio` times the larger
/// extent and clamps the padded origin at zero. Returns `None` when no
/// primitive is found, when an accumulator ends up non-finite, or when the
/// padded rectangle would have a non-positive side; callers fall back to
/// declared dimensions.
pub fn content_bounds(svg: &str, padding_ratio: f64) -> Option<BoundsRect> {
    let doc = Document::parse(svg).ok()?;
    let mut acc = Accumulator::new();

    for node in doc.descendants().filter(|n| n.is_element()) {
        if inside_defs(&node) {
            continue;
        }
        match node.tag_name().name() {
            "rect" => scan_rect(&node, &mut acc),
            "circle" => scan_circle(&node, &mut acc),
            "path" => {
                if let Some(d) = node.attribute("d") {
                    for (x, y) in coordinate_pairs(d) {
                        acc.point(x, y);
                    }
                }
            }
            _ => {}
        }
    }

    acc.finish(padding_ratio)
}

/// Estimate bounds from already-optimized markup.
///
/// A `viewBox` that survived a structural optimizer is assumed tighter and
/// more reliable than a manual geometry scan, so it is preferred when present
/// with positive area; otherwise this falls back to [`content_bounds`].
pub fn bounds_of_optimized(svg: &str, padding_ratio: f64) -> Option<BoundsRect> {
    if let Ok(doc) = Document::parse(svg) {
        if let Some(rect) = svg_root(&doc).and_then(|root| parse_view_box(root.attribute("viewBox")))
        {
            return Some(rect);
        }
    }
    content_bounds(svg, padding_ratio)
}

fn inside_defs(node: &Node<'_, '_>) -> bool {
    node.ancestors()
        .skip(1)
        .any(|a| a.tag_name().name() == "defs")
}

fn attr_f64(node: &Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name)?.trim().parse::<f64>().ok()
}

fn scan_rect(node: &Node<'_, '_>, acc: &mut Accumulator) {
    let x = attr_f64(node, "x").unwrap_or(0.0);
    let y = attr_f64(node, "y").unwrap_or(0.0);
    let (Some(width), Some(height)) = (attr_f64(node, "width"), attr_f64(node, "height")) else {
        return;
    };
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    acc.point(x, y);
    acc.point(x + width, y + height);
}

fn scan_circle(node: &Node<'_, '_>, acc: &mut Accumulator) {
    let cx = attr_f64(node, "cx").unwrap_or(0.0);
    let cy = attr_f64(node, "cy").unwrap_or(0.0);
    let Some(r) = attr_f64(node, "r") else {
        return;
    };
    if r <= 0.0 {
        return;
    }
    acc.point(cx - r, cy - r);
    acc.point(cx + r, cy + r);
}

/// Running min/max extents over scanned points.
struct Accumulator {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    seen: bool,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            seen: false,
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.seen = true;
    }

    fn finish(self, padding_ratio: f64) -> Option<BoundsRect> {
        if !self.seen {
            return None;
        }
        let finite = self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite();
        if !finite {
            return None;
        }

        let extent_x = self.max_x - self.min_x;
        let extent_y = self.max_y - self.min_y;
        let padding = padding_ratio * extent_x.max(extent_y);

        let rect = BoundsRect::new(
            (self.min_x - padding).max(0.0),
            (self.min_y - padding).max(0.0),
            extent_x + 2.0 * padding,
            extent_y + 2.0 * padding,
        );
        if rect.has_area() {
            Some(rect)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PADDING: f64 = 0.05;

    #[test]
    fn test_single_rect_unpadded() {
        let svg = r#"<svg><rect x="10" y="10" width="50" height="20"/></svg>"#;
        let rect = content_bounds(svg, 0.0).unwrap();
        assert_eq!(rect, BoundsRect::new(10.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_single_rect_padded() {
        let svg = r#"<svg><rect x="10" y="10" width="50" height="20"/></svg>"#;
        let unpadded = content_bounds(svg, 0.0).unwrap();
        let padded = content_bounds(svg, PADDING).unwrap();
        // 5% of the larger extent (50) on each side.
        assert!((padded.x - 7.5).abs() < 1e-9);
        assert!((padded.y - 7.5).abs() < 1e-9);
        assert!(padded.width > unpadded.width);
        assert!(padded.height > unpadded.height);
        assert!((padded.width - 55.0).abs() < 1e-9);
        assert!((padded.height - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_extents() {
        let svg = r#"<svg><circle cx="100" cy="100" r="50"/></svg>"#;
        let rect = content_bounds(svg, 0.0).unwrap();
        assert_eq!(rect, BoundsRect::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_path_coordinate_pairs() {
        let svg = r#"<svg><path d="M0 0 L40 0 L40 30 Z"/></svg>"#;
        let rect = content_bounds(svg, 0.0).unwrap();
        assert_eq!(rect, BoundsRect::new(0.0, 0.0, 40.0, 30.0));
    }

    #[test]
    fn test_combined_primitives() {
        let svg = r#"<svg>
            <rect x="0" y="0" width="10" height="10"/>
            <circle cx="50" cy="50" r="10"/>
        </svg>"#;
        let rect = content_bounds(svg, 0.0).unwrap();
        assert_eq!(rect, BoundsRect::new(0.0, 0.0, 60.0, 60.0));
    }

    #[test]
    fn test_defs_only_returns_none() {
        let svg = r#"<svg><defs><rect width="10" height="10"/></defs></svg>"#;
        assert!(content_bounds(svg, PADDING).is_none());
    }

    #[test]
    fn test_no_primitives_returns_none() {
        assert!(content_bounds("<svg><g/></svg>", PADDING).is_none());
    }

    #[test]
    fn test_degenerate_extent_returns_none() {
        // A path with a single point has zero extent; padding of zero extent
        // is zero, so no positive-area rectangle can be produced.
        let svg = r#"<svg><path d="M5 5"/></svg>"#;
        assert!(content_bounds(svg, PADDING).is_none());
    }

    #[test]
    fn test_origin_clamped_at_zero() {
        let svg = r#"<svg><rect x="1" y="1" width="100" height="100"/></svg>"#;
        let rect = content_bounds(svg, PADDING).unwrap();
        // Padding (5) exceeds the origin (1); clamp at zero instead of going
        // negative.
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_malformed_markup_returns_none() {
        assert!(content_bounds("<svg><rect", PADDING).is_none());
    }

    #[test]
    fn test_optimized_prefers_view_box() {
        let svg = r#"<svg viewBox="5 5 90 90"><rect x="10" y="10" width="10" height="10"/></svg>"#;
        let rect = bounds_of_optimized(svg, PADDING).unwrap();
        assert_eq!(rect, BoundsRect::new(5.0, 5.0, 90.0, 90.0));
    }

    #[test]
    fn test_optimized_falls_back_to_scan() {
        let svg = r#"<svg><rect x="10" y="10" width="50" height="20"/></svg>"#;
        let rect = bounds_of_optimized(svg, 0.0).unwrap();
        assert_eq!(rect, BoundsRect::new(10.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_optimized_ignores_degenerate_view_box() {
        let svg = r#"<svg viewBox="0 0 0 0"><rect width="8" height="4"/></svg>"#;
        let rect = bounds_of_optimized(svg, 0.0).unwrap();
        assert_eq!(rect, BoundsRect::new(0.0, 0.0, 8.0, 4.0));
    }
}

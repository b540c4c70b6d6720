//! Declared dimension extraction.
//!
//! Recovers the document's own idea of its size, in a fixed fallback order:
//! explicit `width`/`height` attributes first, then the `viewBox` span. When
//! the markup does not parse as XML at all, a regex scan over the raw text
//! applies the same order. Absence of a match is a normal silent outcome.

use regex::Regex;
use roxmltree::{Document, Node};

use crate::model::{BoundsRect, DeclaredSize};

/// Extract declared dimensions from SVG markup.
///
/// Returns `width`/`height` attribute values when both are present, the
/// `viewBox` span when either is missing, and whatever partial information
/// remains otherwise. Never fails: malformed markup degrades to a raw text
/// scan, and undeterminable dimensions come back as `None`.
///
/// # Example
///
/// ```
/// use svgnorm::extract::extract_dimensions;
///
/// let size = extract_dimensions(r#"<svg width="300" height="150"/>"#);
/// assert_eq!(size.width, Some(300.0));
/// assert_eq!(size.height, Some(150.0));
/// ```
pub fn extract_dimensions(svg: &str) -> DeclaredSize {
    match Document::parse(svg) {
        Ok(doc) => match svg_root(&doc) {
            Some(root) => dimensions_from_root(root),
            None => DeclaredSize::empty(),
        },
        Err(_) => dimensions_from_raw(svg),
    }
}

/// Find the `<svg>` element, tolerating wrappers and namespacing.
pub(crate) fn svg_root<'a>(doc: &'a Document<'a>) -> Option<Node<'a, 'a>> {
    let root = doc.root_element();
    if root.tag_name().name() == "svg" {
        return Some(root);
    }
    doc.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "svg")
}

fn dimensions_from_root(root: Node<'_, '_>) -> DeclaredSize {
    let width = parse_length(root.attribute("width"));
    let height = parse_length(root.attribute("height"));

    if width.is_some() && height.is_some() {
        return DeclaredSize { width, height };
    }

    if let Some(vb) = parse_view_box(root.attribute("viewBox")) {
        return DeclaredSize::new(vb.width, vb.height);
    }

    DeclaredSize { width, height }
}

/// Parse a length attribute value: a plain finite positive number, with an
/// optional `px` suffix. Any other unit falls through to the next source.
fn parse_length(value: Option<&str>) -> Option<f64> {
    let raw = value?.trim();
    let raw = raw.strip_suffix("px").unwrap_or(raw).trim_end();
    let parsed: f64 = raw.parse().ok()?;
    if parsed.is_finite() && parsed > 0.0 {
        Some(parsed)
    } else {
        None
    }
}

/// Parse a `viewBox` value: four numeric tokens separated by whitespace
/// and/or commas. Returns `None` unless the span is positive and finite.
pub(crate) fn parse_view_box(value: Option<&str>) -> Option<BoundsRect> {
    let tokens: Vec<f64> = value?
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    if tokens.len() != 4 {
        return None;
    }

    let rect = BoundsRect::new(tokens[0], tokens[1], tokens[2], tokens[3]);
    if rect.has_area() && rect.x.is_finite() && rect.y.is_finite() {
        Some(rect)
    } else {
        None
    }
}

/// Regex fallback for markup that does not parse as XML.
///
/// Mirrors the DOM path: explicit attributes first, then the view-box.
fn dimensions_from_raw(svg: &str) -> DeclaredSize {
    // Quotes are optional: broken exports sometimes drop them entirely.
    let re_width = Regex::new(r#"\bwidth\s*=\s*["']?\s*(\d*\.?\d+)(?:px)?\s*["']?"#).unwrap();
    let re_height = Regex::new(r#"\bheight\s*=\s*["']?\s*(\d*\.?\d+)(?:px)?\s*["']?"#).unwrap();

    let width = re_width
        .captures(svg)
        .and_then(|c| c[1].parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0);
    let height = re_height
        .captures(svg)
        .and_then(|c| c[1].parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0);

    if width.is_some() && height.is_some() {
        return DeclaredSize { width, height };
    }

    let re_view_box = Regex::new(r#"\bviewBox\s*=\s*["']([^"']+)["']"#).unwrap();
    if let Some(vb) = re_view_box
        .captures(svg)
        .and_then(|c| parse_view_box(Some(c.get(1).map_or("", |m| m.as_str()))))
    {
        return DeclaredSize::new(vb.width, vb.height);
    }

    DeclaredSize { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_attributes() {
        let size = extract_dimensions(r#"<svg width="300" height="150"></svg>"#);
        assert_eq!(size, DeclaredSize::new(300.0, 150.0));
    }

    #[test]
    fn test_attribute_order_irrelevant() {
        let size = extract_dimensions(r#"<svg height="150" width="300"></svg>"#);
        assert_eq!(size, DeclaredSize::new(300.0, 150.0));
    }

    #[test]
    fn test_single_quotes() {
        let size = extract_dimensions("<svg width='42.5' height='17'/>");
        assert_eq!(size, DeclaredSize::new(42.5, 17.0));
    }

    #[test]
    fn test_view_box_fallback() {
        let size = extract_dimensions(r#"<svg viewBox="0 0 300 150"></svg>"#);
        assert_eq!(size, DeclaredSize::new(300.0, 150.0));
    }

    #[test]
    fn test_view_box_wins_when_height_missing() {
        let size = extract_dimensions(r#"<svg width="300" viewBox="0 0 20 10"/>"#);
        assert_eq!(size, DeclaredSize::new(20.0, 10.0));
    }

    #[test]
    fn test_partial_without_view_box() {
        let size = extract_dimensions(r#"<svg width="300"/>"#);
        assert_eq!(size.width, Some(300.0));
        assert_eq!(size.height, None);
    }

    #[test]
    fn test_nothing_declared() {
        let size = extract_dimensions("<svg><rect width=\"5\" height=\"5\"/></svg>");
        // The rect's attributes must not leak into the root's dimensions.
        assert_eq!(size, DeclaredSize::empty());
    }

    #[test]
    fn test_px_suffix_accepted() {
        let size = extract_dimensions(r#"<svg width="300px" height="150px"/>"#);
        assert_eq!(size, DeclaredSize::new(300.0, 150.0));
    }

    #[test]
    fn test_other_units_fall_through() {
        let size = extract_dimensions(r#"<svg width="10cm" height="5cm" viewBox="0 0 8 4"/>"#);
        assert_eq!(size, DeclaredSize::new(8.0, 4.0));
    }

    #[test]
    fn test_view_box_with_commas() {
        let size = extract_dimensions(r#"<svg viewBox="0, 0, 24, 24"/>"#);
        assert_eq!(size, DeclaredSize::new(24.0, 24.0));
    }

    #[test]
    fn test_malformed_markup_regex_fallback() {
        // Unclosed tag: roxmltree rejects this, the raw scan still works.
        let size = extract_dimensions(r#"<svg width="88" height="44""#);
        assert_eq!(size, DeclaredSize::new(88.0, 44.0));
    }

    #[test]
    fn test_malformed_markup_unquoted_attributes() {
        let size = extract_dimensions("<svg width=300 height=150");
        assert_eq!(size, DeclaredSize::new(300.0, 150.0));
    }

    #[test]
    fn test_malformed_markup_view_box_fallback() {
        let size = extract_dimensions(r#"<svg viewBox="0 0 64 32" <broken"#);
        assert_eq!(size, DeclaredSize::new(64.0, 32.0));
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let size = extract_dimensions(r#"<svg width="0" height="-5"/>"#);
        assert_eq!(size, DeclaredSize::empty());
    }

    #[test]
    fn test_parse_view_box_degenerate() {
        assert!(parse_view_box(Some("0 0 0 100")).is_none());
        assert!(parse_view_box(Some("0 0 100")).is_none());
        assert!(parse_view_box(Some("a b c d")).is_none());
        assert!(parse_view_box(None).is_none());
    }

    #[test]
    fn test_namespaced_root() {
        let size = extract_dimensions(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="6"/>"#,
        );
        assert_eq!(size, DeclaredSize::new(12.0, 6.0));
    }
}

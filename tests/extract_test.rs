//! Integration tests for dimension and bounds extraction.

use svgnorm::extract::{bounds_of_optimized, content_bounds, extract_dimensions};
use svgnorm::DeclaredSize;

// ==================== Dimension Extraction ====================

#[test]
fn explicit_attributes_returned_exactly() {
    // Attribute ordering and quoting style are irrelevant.
    for svg in [
        r#"<svg width="300" height="150"></svg>"#,
        r#"<svg height="150" width="300"></svg>"#,
        "<svg width='300' height='150'></svg>",
        "<svg height='150' width='300'/>",
    ] {
        let size = extract_dimensions(svg);
        assert_eq!(size, DeclaredSize::new(300.0, 150.0), "input: {svg}");
    }
}

#[test]
fn view_box_fallback_uses_third_and_fourth_tokens() {
    let size = extract_dimensions(r#"<svg viewBox="0 0 300 150"></svg>"#);
    assert_eq!(size, DeclaredSize::new(300.0, 150.0));

    let size = extract_dimensions(r#"<svg viewBox="-10 -20 300 150"></svg>"#);
    assert_eq!(size, DeclaredSize::new(300.0, 150.0));
}

#[test]
fn absence_is_silent_not_an_error() {
    let size = extract_dimensions("<svg></svg>");
    assert_eq!(size, DeclaredSize::empty());

    let size = extract_dimensions("complete garbage, not even markup");
    assert_eq!(size, DeclaredSize::empty());
}

#[test]
fn decimal_values_supported() {
    let size = extract_dimensions(r#"<svg width="12.5" height="6.25"/>"#);
    assert_eq!(size, DeclaredSize::new(12.5, 6.25));
}

// ==================== Content Bounds ====================

#[test]
fn single_rect_exact_before_padding() {
    let svg = r#"<svg><rect x="10" y="10" width="50" height="20"/></svg>"#;
    let unpadded = content_bounds(svg, 0.0).unwrap();
    assert_eq!(
        (unpadded.x, unpadded.y, unpadded.width, unpadded.height),
        (10.0, 10.0, 50.0, 20.0)
    );

    // Padding is always added when content is found.
    let padded = content_bounds(svg, 0.05).unwrap();
    assert!(padded.width > unpadded.width);
    assert!(padded.height > unpadded.height);
}

#[test]
fn defs_only_document_yields_none() {
    let svg = r#"<svg><defs><rect x="0" y="0" width="10" height="10"/><circle cx="5" cy="5" r="5"/></defs></svg>"#;
    assert!(content_bounds(svg, 0.05).is_none());
}

#[test]
fn circle_centered_scan() {
    // Scenario: circle at (100,100) with radius 50 inside a 200x200 view-box.
    let svg = r#"<svg viewBox="0 0 200 200"><circle cx="100" cy="100" r="50"/></svg>"#;

    let size = extract_dimensions(svg);
    assert_eq!(size, DeclaredSize::new(200.0, 200.0));

    let rect = content_bounds(svg, 0.05).unwrap();
    // Unpadded extent is 50..150 on both axes; 5% of 100 = 5 per side.
    assert!((rect.x - 45.0).abs() < 1e-9);
    assert!((rect.y - 45.0).abs() < 1e-9);
    assert!((rect.width - 110.0).abs() < 1e-9);
    assert!((rect.height - 110.0).abs() < 1e-9);
}

#[test]
fn path_scan_is_coordinate_pair_approximation() {
    // Control points contribute to bounds even if the curve never reaches
    // them; overestimation is the accepted direction of error.
    let svg = r#"<svg><path d="M0 0 C 100 0 100 100 0 10"/></svg>"#;
    let rect = content_bounds(svg, 0.0).unwrap();
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 100.0);
}

#[test]
fn optimized_mode_prefers_surviving_view_box() {
    let svg = r#"<svg viewBox="0 0 24 24"><path d="M2 2 L22 22"/></svg>"#;
    let rect = bounds_of_optimized(svg, 0.05).unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 24.0, 24.0));
}

#[test]
fn optimized_mode_scans_when_view_box_absent() {
    let svg = r#"<svg><path d="M2 2 L22 22"/></svg>"#;
    let rect = bounds_of_optimized(svg, 0.0).unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (2.0, 2.0, 20.0, 20.0));
}

//! Approximate coordinate extraction from path data strings.

use std::sync::OnceLock;

use regex::Regex;

/// Numeric token pattern, compiled once; this runs once per `<path>` in every
/// bounds scan.
fn number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap())
}

/// Extract coordinate pairs from a path `d` string.
///
/// This is a deliberately approximate parse: command letters (`M`, `L`, `C`,
/// `Z`, ...) and relative-vs-absolute semantics are ignored, and every
/// consecutive pair of numeric tokens is treated as an `(x, y)` point. Curve
/// control points may overestimate the visible bounds, and commands consuming
/// an odd number of parameters can drift the pairing. Conservative
/// overestimation is the accepted direction of error.
///
/// # Example
///
/// ```
/// use svgnorm::extract::coordinate_pairs;
///
/// let points = coordinate_pairs("M10 20 L30.5 -40");
/// assert_eq!(points, vec![(10.0, 20.0), (30.5, -40.0)]);
/// ```
pub fn coordinate_pairs(d: &str) -> Vec<(f64, f64)> {
    let numbers: Vec<f64> = number_pattern()
        .find_iter(d)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    numbers
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

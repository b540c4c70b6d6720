//! # svgnorm
//!
//! SVG normalization library for Rust.
//!
//! This library normalizes vector assets for storage and responsive
//! embedding: it recovers declared dimensions, estimates content bounds from
//! drawable primitives, runs a two-pass structural optimization (cleanup
//! first, then sizing-strip), and scale-fits the result into a configured
//! min/max range.
//!
//! ## Quick Start
//!
//! ```
//! use svgnorm::normalize_str;
//!
//! let svg = r#"<svg viewBox="0 0 200 200"><circle cx="100" cy="100" r="50"/></svg>"#;
//! let outcome = normalize_str(svg);
//!
//! assert!(outcome.optimized);
//! let dims = outcome.dimensions.unwrap();
//! assert_eq!((dims.width, dims.height), (200, 200));
//! // Fixed sizing is stripped for responsive embedding.
//! assert!(!outcome.markup.contains("viewBox"));
//! ```
//!
//! ## Features
//!
//! - **Dimension hierarchy**: explicit attributes, then view-box, then
//!   content scan, then a default square
//! - **Pluggable optimizer**: any [`SvgOptimizer`] honoring the two-pass
//!   contract is substitutable; a streaming implementation is built in
//! - **Graceful degradation**: optimizer failures keep the original bytes
//!   and never fail the calling flow
//! - **SVGZ support**: gzip-compressed files are read and written
//!   transparently
//! - **Batch API**: Rayon-parallel normalization of independent files

pub mod batch;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod optimize;
pub mod pipeline;

// Re-export commonly used types
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, is_svg, is_svg_bytes, SvgFormat,
};
pub use error::{Error, Result};
pub use extract::extract_dimensions;
pub use model::{BoundsRect, DeclaredSize, Dimensions, NormalizeOutcome};
pub use optimize::{DefaultOptimizer, NoopOptimizer, OptimizePass, Plugin, SvgOptimizer};
pub use pipeline::{scale_fit, NormalizeOptions, NormalizePipeline};

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Estimate content bounds with the default padding ratio.
///
/// See [`extract::content_bounds`] for the parameterized form.
pub fn content_bounds(svg: &str) -> Option<BoundsRect> {
    extract::content_bounds(svg, pipeline::DEFAULT_PADDING_RATIO)
}

/// Normalize SVG markup with default options.
///
/// # Example
///
/// ```
/// let outcome = svgnorm::normalize_str(r#"<svg width="5000" height="2000"/>"#);
/// let dims = outcome.dimensions.unwrap();
/// assert_eq!((dims.width, dims.height), (1000, 400));
/// ```
pub fn normalize_str(svg: &str) -> NormalizeOutcome {
    NormalizePipeline::new().normalize(svg)
}

/// Normalize SVG markup with custom options.
pub fn normalize_str_with_options(svg: &str, options: NormalizeOptions) -> NormalizeOutcome {
    NormalizePipeline::with_options(options).normalize(svg)
}

/// Normalize SVG or SVGZ bytes with default options.
///
/// Unlike [`normalize_str`], this can fail: the bytes must be recognizable
/// SVG/SVGZ and decode to UTF-8 text.
pub fn normalize_bytes(data: &[u8]) -> Result<NormalizeOutcome> {
    normalize_bytes_with_options(data, NormalizeOptions::default())
}

/// Normalize SVG or SVGZ bytes with custom options.
pub fn normalize_bytes_with_options(
    data: &[u8],
    options: NormalizeOptions,
) -> Result<NormalizeOutcome> {
    let format = detect_format_from_bytes(data)?;
    let text = decode_input(data, format)?;
    Ok(normalize_str_with_options(&text, options))
}

/// Normalize an SVG or SVGZ file in place.
///
/// Reads the file, normalizes it, and writes the outcome back to the same
/// path, preserving gzip compression when the input was compressed. The
/// returned outcome's `markup` is the uncompressed text.
///
/// # Example
///
/// ```no_run
/// let outcome = svgnorm::normalize_file("logo.svg")?;
/// println!("stored at {:?}", outcome.dimensions);
/// # Ok::<(), svgnorm::Error>(())
/// ```
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<NormalizeOutcome> {
    normalize_file_with_options(path, NormalizeOptions::default())
}

/// Normalize an SVG or SVGZ file in place with custom options.
pub fn normalize_file_with_options<P: AsRef<Path>>(
    path: P,
    options: NormalizeOptions,
) -> Result<NormalizeOutcome> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let format = detect_format_from_bytes(&data)?;
    let text = decode_input(&data, format)?;
    let outcome = normalize_str_with_options(&text, options);
    fs::write(path, encode_output(&outcome.markup, format)?)?;
    Ok(outcome)
}

/// Normalize an SVG or SVGZ file, writing the result to a different path.
///
/// Compression of the output follows the OUTPUT extension: a `.svgz`
/// destination is gzip-compressed regardless of the input container.
pub fn normalize_file_to<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<NormalizeOutcome> {
    normalize_file_to_with_options(input, output, NormalizeOptions::default())
}

/// [`normalize_file_to`] with custom options.
pub fn normalize_file_to_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: NormalizeOptions,
) -> Result<NormalizeOutcome> {
    let data = fs::read(input.as_ref())?;
    let format = detect_format_from_bytes(&data)?;
    let text = decode_input(&data, format)?;
    let outcome = normalize_str_with_options(&text, options);

    let output = output.as_ref();
    let compress = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svgz"));
    let out_format = SvgFormat {
        compressed: compress,
        xml_declaration: format.xml_declaration,
    };
    fs::write(output, encode_output(&outcome.markup, out_format)?)?;
    Ok(outcome)
}

/// Normalize an SVG or SVGZ file in place, asynchronously.
///
/// Requires the `async` feature. The pipeline itself stays synchronous; only
/// the file I/O is awaited.
#[cfg(feature = "async")]
pub async fn normalize_file_async<P: AsRef<Path>>(path: P) -> Result<NormalizeOutcome> {
    normalize_file_with_options_async(path, NormalizeOptions::default()).await
}

/// Async variant of [`normalize_file_with_options`].
#[cfg(feature = "async")]
pub async fn normalize_file_with_options_async<P: AsRef<Path>>(
    path: P,
    options: NormalizeOptions,
) -> Result<NormalizeOutcome> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    let format = detect_format_from_bytes(&data)?;
    let text = decode_input(&data, format)?;
    let outcome = normalize_str_with_options(&text, options);
    tokio::fs::write(path, encode_output(&outcome.markup, format)?).await?;
    Ok(outcome)
}

/// Read a file's markup as text, inflating SVGZ transparently.
///
/// # Example
///
/// ```no_run
/// let svg = svgnorm::read_markup("logo.svgz")?;
/// let size = svgnorm::extract_dimensions(&svg);
/// # Ok::<(), svgnorm::Error>(())
/// ```
pub fn read_markup<P: AsRef<Path>>(path: P) -> Result<String> {
    let data = fs::read(path.as_ref())?;
    let format = detect_format_from_bytes(&data)?;
    decode_input(&data, format)
}

/// Decode raw input bytes to markup text, inflating SVGZ.
fn decode_input(data: &[u8], format: SvgFormat) -> Result<String> {
    if format.compressed {
        let mut text = String::new();
        GzDecoder::new(data).read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::str::from_utf8(data)?.to_string())
    }
}

/// Encode markup text for storage, deflating when the container is SVGZ.
fn encode_output(markup: &str, format: SvgFormat) -> Result<Vec<u8>> {
    if format.compressed {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(markup.as_bytes())?;
        Ok(encoder.finish()?)
    } else {
        Ok(markup.as_bytes().to_vec())
    }
}

//! SVG format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// SVG container information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgFormat {
    /// Whether the file is gzip-compressed (SVGZ).
    pub compressed: bool,
    /// Whether the document opens with an XML declaration.
    pub xml_declaration: bool,
}

impl std::fmt::Display for SvgFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.compressed {
            write!(f, "SVGZ (gzip-compressed SVG)")
        } else {
            write!(f, "SVG")
        }
    }
}

/// Gzip magic bytes.
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// How many leading bytes the sniffer inspects.
const SNIFF_WINDOW: usize = 512;

/// Detect SVG format from a file path.
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `Ok(SvgFormat)` if the file looks like SVG or SVGZ
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SvgFormat> {
    let mut file = File::open(path)?;
    let mut header = vec![0u8; SNIFF_WINDOW];
    let read = file.read(&mut header)?;
    header.truncate(read);
    detect_format_from_bytes(&header)
}

/// Detect SVG format from bytes.
///
/// Only the first few hundred bytes are inspected: gzip magic marks SVGZ;
/// otherwise the window must contain an `<svg` open tag.
///
/// # Arguments
/// * `data` - Leading bytes of the file (the whole buffer is fine too)
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SvgFormat> {
    if data.len() < 4 {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(GZIP_MAGIC) {
        return Ok(SvgFormat {
            compressed: true,
            xml_declaration: false,
        });
    }

    let window = String::from_utf8_lossy(&data[..data.len().min(SNIFF_WINDOW)]);
    let trimmed = window.trim_start_matches('\u{feff}').trim_start();

    if !window.contains("<svg") {
        return Err(Error::UnknownFormat);
    }

    Ok(SvgFormat {
        compressed: false,
        xml_declaration: trimmed.starts_with("<?xml"),
    })
}

/// Check if a file is an SVG or SVGZ.
pub fn is_svg<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent an SVG or SVGZ.
pub fn is_svg_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_plain_svg() {
        let format = detect_format_from_bytes(b"<svg viewBox=\"0 0 1 1\"/>").unwrap();
        assert!(!format.compressed);
        assert!(!format.xml_declaration);
    }

    #[test]
    fn test_detect_with_xml_declaration() {
        let format =
            detect_format_from_bytes(b"<?xml version=\"1.0\"?>\n<svg/>").unwrap();
        assert!(format.xml_declaration);
        assert_eq!(format.to_string(), "SVG");
    }

    #[test]
    fn test_detect_with_bom_and_whitespace() {
        let format = detect_format_from_bytes("\u{feff}  <?xml version=\"1.0\"?><svg/>".as_bytes())
            .unwrap();
        assert!(format.xml_declaration);
    }

    #[test]
    fn test_detect_svgz() {
        let format = detect_format_from_bytes(&[0x1f, 0x8b, 0x08, 0x00, 0x00]).unwrap();
        assert!(format.compressed);
        assert_eq!(format.to_string(), "SVGZ (gzip-compressed SVG)");
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"<!DOCTYPE html><html></html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b"%PDF-1.7"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_too_short() {
        assert!(matches!(
            detect_format_from_bytes(b"<s"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b""),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_is_svg_bytes() {
        assert!(is_svg_bytes(b"<svg width=\"1\" height=\"1\"/>"));
        assert!(!is_svg_bytes(b"not markup"));
    }
}

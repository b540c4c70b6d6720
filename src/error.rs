//! Error types for the svgnorm library.

use std::io;
use thiserror::Error;

/// Result type alias for svgnorm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during SVG normalization.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as SVG or SVGZ.
    #[error("Unknown file format: not a valid SVG document")]
    UnknownFormat,

    /// The markup could not be parsed as XML.
    ///
    /// Dimension and bounds extraction never raise this variant (they fall
    /// back silently); it is only surfaced by callers that require a parsed
    /// document, such as the built-in optimizer.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// A structural optimization pass failed.
    ///
    /// The orchestrator recovers from this locally by keeping the original
    /// markup; see [`crate::pipeline::NormalizePipeline::normalize`].
    #[error("SVG optimization error: {0}")]
    Optimize(String),

    /// Text encoding error (input bytes are not valid UTF-8).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

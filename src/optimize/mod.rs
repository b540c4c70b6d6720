//! Structural optimization of SVG markup.
//!
//! The pipeline treats the optimizer as an injected capability: anything
//! implementing [`SvgOptimizer`] that honors the two-pass contract (a cleanup
//! pass that preserves the `viewBox`, then a responsive pass that strips
//! fixed sizing) is substitutable. [`DefaultOptimizer`] is the built-in
//! streaming implementation; [`NoopOptimizer`] passes markup through
//! unchanged, which is useful in tests and for callers that only want the
//! sizing policy.
//!
//! # Example
//!
//! ```
//! use svgnorm::optimize::{DefaultOptimizer, OptimizePass, SvgOptimizer};
//!
//! let optimizer = DefaultOptimizer::new();
//! let out = optimizer
//!     .optimize("<svg viewBox=\"0 0 10 10\"><!-- note --><rect width=\"10\" height=\"10\"/></svg>",
//!               &OptimizePass::cleanup())
//!     .unwrap();
//! assert!(!out.contains("<!--"));
//! assert!(out.contains("viewBox"));
//! ```

mod builtin;
mod plugins;

pub use builtin::DefaultOptimizer;
pub use plugins::{OptimizePass, Plugin};

use crate::error::Result;

/// A structural markup optimizer.
///
/// Implementations rewrite vector markup to remove redundancy and normalize
/// structure without changing visual output. They must apply exactly the
/// transformations named by the pass and fail with
/// [`Error::Optimize`](crate::Error::Optimize) on markup they cannot process.
pub trait SvgOptimizer {
    /// Run one optimization pass over the markup.
    fn optimize(&self, svg: &str, pass: &OptimizePass) -> Result<String>;

    /// Human-readable optimizer name, for logs.
    fn name(&self) -> &str {
        "optimizer"
    }
}

/// An optimizer that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOptimizer;

impl NoopOptimizer {
    /// Create a new no-op optimizer.
    pub fn new() -> Self {
        Self
    }
}

impl SvgOptimizer for NoopOptimizer {
    fn optimize(&self, svg: &str, _pass: &OptimizePass) -> Result<String> {
        Ok(svg.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

//! The optimize-and-refit orchestrator.
//!
//! A single linear pipeline: extract declared and scanned dimensions, run a
//! structure-cleanup optimization pass, re-derive bounds from its output, run
//! a sizing-strip pass, and scale-fit the result. One failure exit (any
//! optimizer error reverts to the raw input) and one success exit; no
//! retries, no internal concurrency, no cancellation.

mod options;
mod scale;

pub use options::{
    NormalizeOptions, DEFAULT_MAX_DIMENSION, DEFAULT_MIN_DIMENSION, DEFAULT_PADDING_RATIO,
    DEFAULT_PRECISION,
};
pub use scale::scale_fit;

use log::{debug, warn};

use crate::error::Error;
use crate::extract::{bounds_of_optimized, content_bounds, extract_dimensions};
use crate::model::{DeclaredSize, Dimensions, NormalizeOutcome};
use crate::optimize::{DefaultOptimizer, OptimizePass, SvgOptimizer};

/// The normalization pipeline.
///
/// Couples a [`NormalizeOptions`] policy with an injected [`SvgOptimizer`].
/// Construction is cheap; the pipeline holds no per-document state and may be
/// reused across documents.
///
/// # Example
///
/// ```
/// use svgnorm::pipeline::NormalizePipeline;
///
/// let pipeline = NormalizePipeline::new();
/// let outcome = pipeline.normalize(r#"<svg width="3000" height="3000"/>"#);
/// assert!(outcome.optimized);
/// assert_eq!(outcome.dimensions.unwrap().width, 1000);
/// ```
pub struct NormalizePipeline<O = DefaultOptimizer> {
    options: NormalizeOptions,
    optimizer: O,
}

impl NormalizePipeline<DefaultOptimizer> {
    /// Create a pipeline with default options and the built-in optimizer.
    pub fn new() -> Self {
        Self::with_options(NormalizeOptions::default())
    }

    /// Create a pipeline with the given options and the built-in optimizer.
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self {
            options,
            optimizer: DefaultOptimizer::new(),
        }
    }
}

impl Default for NormalizePipeline<DefaultOptimizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: SvgOptimizer> NormalizePipeline<O> {
    /// Replace the optimizer, keeping the options.
    pub fn with_optimizer<P: SvgOptimizer>(self, optimizer: P) -> NormalizePipeline<P> {
        NormalizePipeline {
            options: self.options,
            optimizer,
        }
    }

    /// The pipeline's options.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize one SVG document.
    ///
    /// Never fails: optimizer errors are caught, logged, and degrade the
    /// outcome to the original markup (see [`NormalizeOutcome`]).
    pub fn normalize(&self, svg: &str) -> NormalizeOutcome {
        let declared = extract_dimensions(svg);
        let scanned = content_bounds(svg, self.options.padding_ratio);
        let mut working = choose_dimensions(&declared, scanned.map(|b| (b.width, b.height)));
        debug!(
            "declared={:?} scanned={:?} working={:?}",
            declared,
            scanned,
            working
        );

        if !self.options.optimize {
            return self.degraded_outcome(svg, working);
        }

        let cleanup = OptimizePass::cleanup().with_precision(self.options.precision);
        let pass1 = match self.optimizer.optimize(svg, &cleanup) {
            Ok(markup) => markup,
            Err(err) => return self.recover(svg, working, err),
        };

        // The cleanup pass preserves the view-box, so bounds re-derived from
        // its output are authoritative when they have positive area.
        if let Some(bounds) = bounds_of_optimized(&pass1, self.options.padding_ratio) {
            working = Some((bounds.width.round(), bounds.height.round()));
            debug!("refit bounds override: {:?}", working);
        }

        let pass2 = match self.optimizer.optimize(&pass1, &OptimizePass::responsive()) {
            Ok(markup) => markup,
            Err(err) => return self.recover(svg, working, err),
        };

        let dimensions = working
            .map(|(w, h)| scale_fit(w, h, &self.options))
            .unwrap_or_else(|| Dimensions::square(self.options.min_dimension));

        NormalizeOutcome {
            byte_size: pass2.len(),
            markup: pass2,
            dimensions: Some(dimensions),
            optimized: true,
        }
    }

    /// Failure exit: keep the original bytes and whatever dimensions were
    /// determined before the failing step. Asset creation proceeds with
    /// unoptimized data instead of surfacing a hard error.
    fn recover(&self, svg: &str, working: Option<(f64, f64)>, err: Error) -> NormalizeOutcome {
        warn!(
            "{} failed, keeping original markup: {}",
            self.optimizer.name(),
            err
        );
        self.degraded_outcome(svg, working)
    }

    fn degraded_outcome(&self, svg: &str, working: Option<(f64, f64)>) -> NormalizeOutcome {
        NormalizeOutcome {
            markup: svg.to_string(),
            dimensions: working.map(|(w, h)| scale_fit(w, h, &self.options)),
            byte_size: svg.len(),
            optimized: false,
        }
    }
}

/// Pick working dimensions from declared size and scanned bounds.
///
/// The scan is preferred only when both declared values exist and the scan is
/// not larger in either dimension, guarding against a path-approximation
/// overestimate replacing a trustworthy declared size.
fn choose_dimensions(
    declared: &DeclaredSize,
    scanned: Option<(f64, f64)>,
) -> Option<(f64, f64)> {
    if let (Some((dw, dh)), Some((sw, sh))) = (declared.pair(), scanned) {
        let (sw, sh) = (sw.round(), sh.round());
        if sw <= dw && sh <= dh {
            return Some((sw, sh));
        }
        return Some((dw, dh));
    }
    declared.pair()
}

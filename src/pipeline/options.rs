//! Normalization options and policy constants.

/// Longest side of the output after clamping.
pub const DEFAULT_MAX_DIMENSION: u32 = 1000;

/// Shortest side of the output after expansion, and the side length of the
/// default square when nothing is determinable.
pub const DEFAULT_MIN_DIMENSION: u32 = 100;

/// Padding added around scanned content bounds, as a fraction of the larger
/// extent.
pub const DEFAULT_PADDING_RATIO: f64 = 0.05;

/// Decimal places kept by numeric cleanup.
pub const DEFAULT_PRECISION: u8 = 3;

/// Options for the normalization pipeline.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Upper clamp for the longer output side.
    pub max_dimension: u32,

    /// Lower bound for the shorter output side; also the default square side
    /// when no dimensions are determinable.
    pub min_dimension: u32,

    /// Content-bounds padding ratio.
    pub padding_ratio: f64,

    /// Numeric precision for the cleanup pass.
    pub precision: u8,

    /// Whether to run the optimization passes at all. When disabled the
    /// pipeline only computes dimensions and returns the input unchanged.
    pub optimize: bool,
}

impl NormalizeOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum output dimension.
    pub fn with_max_dimension(mut self, max: u32) -> Self {
        self.max_dimension = max.max(1);
        self
    }

    /// Set the minimum output dimension.
    pub fn with_min_dimension(mut self, min: u32) -> Self {
        self.min_dimension = min.max(1);
        self
    }

    /// Set the content-bounds padding ratio.
    pub fn with_padding_ratio(mut self, ratio: f64) -> Self {
        self.padding_ratio = ratio.max(0.0);
        self
    }

    /// Set the numeric precision.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Enable or disable the optimization passes.
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Disable the optimization passes.
    pub fn sizing_only(mut self) -> Self {
        self.optimize = false;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            min_dimension: DEFAULT_MIN_DIMENSION,
            padding_ratio: DEFAULT_PADDING_RATIO,
            precision: DEFAULT_PRECISION,
            optimize: true,
        }
    }
}

//! Numeric constants shared across the crate.

/// Lower bound of the weighted error of a weak hypothesis.
/// A perfect weak hypothesis would otherwise get an infinite weight.
pub const MIN_WEIGHTED_ERROR:   f64 = 1e-6;
/// Confidence weights whose magnitude is below this value are set to `0`.
pub const CONFIDENCE_EPSILON:   f64 = 1e-10;
/// Training accuracy that is regarded as convergence.
pub const CONVERGENCE_ACCURACY: f64 = 0.999999;
/// Lower bound of the standard deviation used by Gaussian densities.
pub const SIGMA_FLOOR:          f64 = 1e-6;
/// Offset of the no-split cut below the minimum attribute value.
pub const BASELINE_CUT_OFFSET:  f64 = 0.1;
/// Tolerance of `sum(weights) == 1`.
pub const SIMPLEX_TOLERANCE:    f64 = 1e-9;

pub const DEFAULT_ROUNDS:       usize = 100;
pub const DEFAULT_REPEAT:       usize = 5;
pub const DEFAULT_SEED:           u64 = 1234;
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.6;

pub const BUFFER_SIZE:          usize = 256;

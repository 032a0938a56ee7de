//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{
    BoostError,
    Dataset,
    Result,
};
use crate::constants::{
    MIN_WEIGHTED_ERROR,
    SIMPLEX_TOLERANCE,
};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample<D>(sample: &D) -> Result<()>
    where D: Dataset + ?Sized,
{
    let (n_sample, n_feature) = sample.shape();

    // `data` and `target` must have the length greater than `0`.
    if n_sample == 0 {
        return Err(BoostError::EmptySample);
    }

    // `data` must have a feature.
    if n_feature == 0 {
        return Err(BoostError::NoAttribute);
    }
    Ok(())
}


/// Check whether two parallel sequences have the same length.
#[inline(always)]
pub(crate) fn check_length(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(BoostError::LengthMismatch { expected, got });
    }
    Ok(())
}


/// Check whether `sample` has the number of attributes a model expects.
#[inline(always)]
pub(crate) fn check_attributes<D>(expected: usize, sample: &D) -> Result<()>
    where D: Dataset + ?Sized,
{
    let got = sample.n_attributes();
    if expected != got {
        return Err(BoostError::AttributeMismatch { expected, got });
    }
    Ok(())
}


/// Check the fraction of the training part of a split.
#[inline(always)]
pub(crate) fn check_fraction(fraction: f64) -> Result<()> {
    if !(fraction > 0f64 && fraction < 1f64) {
        return Err(BoostError::invalid(
            "train_fraction",
            format!("must be in (0, 1). got {fraction}."),
        ));
    }
    Ok(())
}


/// Check the number of boosting rounds.
#[inline(always)]
pub(crate) fn check_rounds(rounds: usize) -> Result<()> {
    if rounds == 0 {
        return Err(BoostError::invalid("rounds", "must be positive"));
    }
    Ok(())
}


/// Check the weighted error of a hypothesis
/// and clamp it into `[1e-6, 1 - 1e-6]`.
/// `NaN` and values outside of `[0, 1]` are rejected.
#[inline(always)]
pub(crate) fn check_weighted_error(weighted_error: f64) -> Result<f64> {
    if weighted_error.is_nan()
        || !(0f64..=1f64 + SIMPLEX_TOLERANCE).contains(&weighted_error)
    {
        return Err(BoostError::InvalidWeightedError(weighted_error));
    }
    let clamped = weighted_error
        .clamp(MIN_WEIGHTED_ERROR, 1f64 - MIN_WEIGHTED_ERROR);
    Ok(clamped)
}


/// Asserts that `dist` is a probability vector.
/// A violation is a bug of this crate, not an input error.
#[inline(always)]
pub(crate) fn assert_simplex(dist: &[f64]) {
    let sum = dist.iter().sum::<f64>();
    debug_assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE * dist.len().max(1) as f64,
        "sum(dist[..]) = {sum}"
    );
    debug_assert!(
        dist.iter().all(|d| *d >= 0f64),
        "distribution has a negative entry"
    );
}

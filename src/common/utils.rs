//! This file provides some common functions
//! such as the confidence weight of a weak hypothesis.
use crate::constants::CONFIDENCE_EPSILON;


/// Returns the confidence weight `0.5 * ln((1 - e) / e)`
/// of a hypothesis with weighted error `e`.
/// Values whose magnitude is below `CONFIDENCE_EPSILON` become `0.0`.
/// Errors above `0.5` yield negative weights, i.e., an inverted vote.
#[inline(always)]
pub fn confidence_weight(weighted_error: f64) -> f64 {
    let alpha = 0.5 * ((1f64 - weighted_error) / weighted_error).ln();
    if alpha.abs() < CONFIDENCE_EPSILON { 0f64 } else { alpha }
}


/// Divides every item by the sum of `items`.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) {
    let z = items.iter().sum::<f64>();

    assert!(z > 0f64, "cannot normalize a vector of sum {z}");

    items.iter_mut()
        .for_each(|item| { *item /= z; });
}


/// Returns the index of the first maximal element.
/// Elements are compared by strict `>`, starting from `-inf`,
/// so the lowest index wins a tie and `0` is returned
/// when nothing exceeds `-inf`.
#[inline(always)]
pub(crate) fn first_argmax<I>(items: I) -> usize
    where I: IntoIterator<Item = f64>,
{
    let mut best = f64::NEG_INFINITY;
    let mut best_index = 0_usize;
    for (i, item) in items.into_iter().enumerate() {
        if item > best {
            best = item;
            best_index = i;
        }
    }
    best_index
}

//! A probability-weighted view of a fixed sample.
use fixedbitset::FixedBitSet;

use crate::{
    Dataset,
    Result,
    common::{checker, utils},
};


/// A sample together with a distribution over its examples.
///
/// `WeightedSample` starts from the uniform distribution `1/N`
/// and is reweighted in place after every boosting round
/// by [`WeightedSample::adjust_weights`].
/// The weights always sum to `1`.
#[derive(Debug, Clone)]
pub struct WeightedSample<'a, D: ?Sized> {
    data: &'a D,
    dist: Vec<f64>,
}


impl<'a, D> WeightedSample<'a, D>
    where D: Dataset + ?Sized,
{
    /// Wraps `data` with the uniform distribution.
    pub fn new(data: &'a D) -> Result<Self> {
        checker::check_sample(data)?;

        let n_sample = data.n_examples();
        let uni = 1f64 / n_sample as f64;
        let dist = vec![uni; n_sample];
        Ok(Self { data, dist })
    }


    /// Returns the underlying sample.
    #[inline]
    pub fn data(&self) -> &'a D {
        self.data
    }


    /// Returns the weight of the `i`th example.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        self.dist[i]
    }


    /// Returns all weights.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }


    /// Always `false`; an empty sample is rejected by `new`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }


    /// Returns the total weight of the examples
    /// that are **not** marked in `correctness`.
    #[inline]
    pub fn weighted_error(&self, correctness: &FixedBitSet) -> f64 {
        self.dist.iter()
            .enumerate()
            .filter(|(i, _)| !correctness.contains(*i))
            .map(|(_, d)| *d)
            .sum::<f64>()
    }


    /// Reweights the examples after a boosting round.
    ///
    /// `correctness[i]` tells whether the last hypothesis
    /// classified the `i`th example correctly, and
    /// `weighted_error` is its weighted error.
    /// The error is clamped into `[1e-6, 1 - 1e-6]`,
    /// then `alpha = 0.5 * ln((1 - e) / e)`.
    /// Correct examples are divided by `exp(alpha)`,
    /// the others are multiplied by it,
    /// and the weights are normalized.
    ///
    /// Returns `alpha`.
    pub fn adjust_weights(
        &mut self,
        correctness: &FixedBitSet,
        weighted_error: f64,
    ) -> Result<f64>
    {
        checker::check_length(self.dist.len(), correctness.len())?;

        let weighted_error = checker::check_weighted_error(weighted_error)?;

        let alpha = utils::confidence_weight(weighted_error);
        let factor = alpha.exp();

        self.dist.iter_mut()
            .enumerate()
            .for_each(|(i, d)| {
                if correctness.contains(i) {
                    *d /= factor;
                } else {
                    *d *= factor;
                }
            });

        utils::normalize(&mut self.dist[..]);
        checker::assert_simplex(&self.dist[..]);

        Ok(alpha)
    }
}

use fixedbitset::FixedBitSet;
use rayon::prelude::*;

use crate::{
    Dataset,
    WeightedSample,
};
use crate::constants::MIN_WEIGHTED_ERROR;


/// A trait that defines the behavor of classifier.
/// You only need to implement [`Classifier::n_classes`] and
/// [`Classifier::predict`].
///
/// The provided methods compute the per-example correctness,
/// the (unweighted) accuracy, and the weighted error
/// that the boosting algorithms need from every weak hypothesis.
pub trait Classifier {
    /// Number of class labels this classifier may output.
    fn n_classes(&self) -> usize;


    /// Predicts the label of the given example.
    fn predict(&self, example: &[f64]) -> usize;


    /// Predicts the label of the `row`th example of `data`.
    /// Override this when the classifier reads a few attributes only.
    fn predict_row<D>(&self, data: &D, row: usize) -> usize
        where D: Dataset + ?Sized,
    {
        self.predict(&data.example(row))
    }


    /// Predicts the labels of `data`.
    fn predict_all<D>(&self, data: &D) -> Vec<usize>
        where D: Dataset + Sync + ?Sized,
              Self: Sync,
    {
        let n_sample = data.n_examples();
        (0..n_sample).into_par_iter()
            .map(|row| self.predict_row(data, row))
            .collect::<Vec<_>>()
    }


    /// Returns the set of examples of `data` classified correctly.
    fn correctness<D>(&self, data: &D) -> FixedBitSet
        where D: Dataset + ?Sized,
    {
        let n_sample = data.n_examples();
        let mut bits = FixedBitSet::with_capacity(n_sample);
        (0..n_sample).for_each(|row| {
            if self.predict_row(data, row) == data.class_label(row) {
                bits.put(row);
            }
        });
        bits
    }


    /// Returns the fraction of examples of `data` classified correctly.
    /// Every example counts the same, regardless of any distribution.
    fn accuracy<D>(&self, data: &D) -> f64
        where D: Dataset + ?Sized,
    {
        let n_sample = data.n_examples();
        if n_sample == 0 { return 0f64; }

        let n_correct = self.correctness(data).count_ones(..);
        n_correct as f64 / n_sample as f64
    }


    /// Returns the total weight of the misclassified examples.
    /// The value is at least `1e-6`.
    fn weighted_error<D>(&self, sample: &WeightedSample<'_, D>) -> f64
        where D: Dataset + ?Sized,
    {
        let correctness = self.correctness(sample.data());
        sample.weighted_error(&correctness)
            .max(MIN_WEIGHTED_ERROR)
    }
}

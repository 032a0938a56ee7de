use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    Dataset,
    Result,
    common::{checker, utils},
};


/// The combined hypothesis that [`AdaBoost`](crate::AdaBoost) returns.
///
/// The `t`th hypothesis votes for its predicted label
/// with weight `weights[t]`;
/// the label with the largest total vote wins,
/// the lowest label among ties.
/// Hypotheses with weight `0` keep their slot but do not change the vote.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
    n_classes: usize,
    n_attributes: usize,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty `WeightedMajority`
    /// over `n_classes` labels and `n_attributes` attributes.
    #[inline]
    pub fn new(n_classes: usize, n_attributes: usize) -> Self {
        Self {
            weights: Vec::new(),
            hypotheses: Vec::new(),
            n_classes,
            n_attributes,
        }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis is combined yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> WeightedMajority<H>
    where H: Classifier,
{
    /// Returns the total vote of every label for `example`.
    pub fn votes(&self, example: &[f64]) -> Vec<f64> {
        let mut votes = vec![0f64; self.n_classes];
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .for_each(|(w, h)| { votes[h.predict(example)] += *w; });
        votes
    }


    /// Returns the accuracy on `data`.
    /// Fails if `data` has a different number of attributes
    /// than the training sample.
    pub fn test<D>(&self, data: &D) -> Result<f64>
        where D: Dataset + ?Sized,
    {
        checker::check_attributes(self.n_attributes, data)?;
        Ok(self.accuracy(data))
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn n_classes(&self) -> usize {
        self.n_classes
    }


    fn predict(&self, example: &[f64]) -> usize {
        utils::first_argmax(self.votes(example))
    }


    fn predict_row<D>(&self, data: &D, row: usize) -> usize
        where D: Dataset + ?Sized,
    {
        let mut votes = vec![0f64; self.n_classes];
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .for_each(|(w, h)| { votes[h.predict_row(data, row)] += *w; });
        utils::first_argmax(votes)
    }
}

use serde::{
    Serialize,
    Deserialize,
};

use crate::{
    Classifier,
    Dataset,
    common::utils,
};

use super::probability::Gaussian;


/// Naive Bayes classifier over a single attribute.
///
/// The score of class `c` for a value `x` is
/// `ln(prior[c]) - ln(sigma[c]) - (x - mu[c])^2 / (2 sigma[c]^2)`.
/// The first class with the largest score is predicted.
/// A class without density (no training mass) scores `-inf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianClassifier {
    pub(super) feature_index: usize,
    pub(super) priors: Vec<f64>,
    pub(super) densities: Vec<Option<Gaussian>>,
}


impl GaussianClassifier {
    /// Index of the attribute this classifier reads.
    #[inline]
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// Laplace-smoothed class priors.
    #[inline]
    pub fn priors(&self) -> &[f64] {
        &self.priors[..]
    }


    /// Per-class densities. `None` for a class without training mass.
    #[inline]
    pub fn densities(&self) -> &[Option<Gaussian>] {
        &self.densities[..]
    }


    /// Computes the logarithmic pseudo-probability of each class
    /// for the attribute value `x`.
    pub fn log_scores(&self, x: f64) -> Vec<f64> {
        self.priors.iter()
            .zip(&self.densities[..])
            .map(|(prior, density)| match density {
                Some(g) => prior.ln() + g.log_pseudo_density(x),
                None => f64::NEG_INFINITY,
            })
            .collect()
    }


    #[inline(always)]
    fn label_of(&self, x: f64) -> usize {
        utils::first_argmax(self.log_scores(x))
    }
}


impl Classifier for GaussianClassifier {
    fn n_classes(&self) -> usize {
        self.priors.len()
    }


    fn predict(&self, example: &[f64]) -> usize {
        self.label_of(example[self.feature_index])
    }


    fn predict_row<D>(&self, data: &D, row: usize) -> usize
        where D: Dataset + ?Sized,
    {
        self.label_of(data.attribute_value(row, self.feature_index))
    }
}

use rand::Rng;

use crate::{
    Dataset,
    WeakLearner,
    WeightedSample,
};
use crate::weak_learner::core::choose_attribute;

use super::probability::Gaussian;
use super::nbayes_classifier::GaussianClassifier;


/// A factory that produces a [`GaussianClassifier`]
/// for a given distribution over training examples.
/// The struct name comes from scikit-learn.
///
/// Each call picks one attribute uniformly at random and fits,
/// for every class `c`,
/// - the Laplace-smoothed prior `(N * W[c] + 1) / (N + C)`,
///   where `W[c]` is the weight mass of class `c`,
/// - the weighted mean of the attribute over class `c`, and
/// - the deviation `sqrt(sum (x - mu)^2 / (N * W[c]))` over class `c`.
///
/// Scaling by `N` turns the weights back into example counts
/// (`N * W[c]` is the class size under the uniform distribution).
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianNB;


impl GaussianNB {
    /// Initializes the GaussianNB instance.
    pub fn init() -> Self {
        Self
    }
}


impl WeakLearner for GaussianNB {
    type Hypothesis = GaussianClassifier;


    fn name(&self) -> &str {
        "Gaussian Naive Bayes"
    }


    fn produce<D, R>(
        &self,
        sample: &WeightedSample<'_, D>,
        rng: &mut R,
    ) -> Self::Hypothesis
        where D: Dataset + ?Sized,
              R: Rng + ?Sized,
    {
        let data = sample.data();
        let dist = sample.weights();
        let n_sample = data.n_examples();
        let n_classes = data.n_classes();
        let feature_index = choose_attribute(data, rng);


        // Weighted counts, rescaled to the number of examples.
        let mut counts = vec![0f64; n_classes];
        let mut weight_sums = vec![0f64; n_classes];
        let mut value_sums = vec![0f64; n_classes];
        dist.iter()
            .enumerate()
            .for_each(|(i, d)| {
                let y = data.class_label(i);
                let x = data.attribute_value(i, feature_index);
                counts[y] += *d * n_sample as f64;
                weight_sums[y] += *d;
                value_sums[y] += x * *d;
            });

        let priors = counts.iter()
            .map(|c| (c + 1f64) / (n_sample + n_classes) as f64)
            .collect::<Vec<_>>();


        let means = value_sums.iter()
            .zip(&weight_sums[..])
            .map(|(v, w)| if *w > 0f64 { Some(v / w) } else { None })
            .collect::<Vec<_>>();


        let mut squares = vec![0f64; n_classes];
        (0..n_sample).for_each(|i| {
            let y = data.class_label(i);
            if let Some(mu) = means[y] {
                let diff = data.attribute_value(i, feature_index) - mu;
                squares[y] += diff * diff;
            }
        });


        let densities = means.into_iter()
            .zip(squares)
            .zip(counts)
            .map(|((mu, sq), count)| {
                mu.map(|mu| Gaussian::new(mu, (sq / count).sqrt()))
            })
            .collect::<Vec<_>>();


        GaussianClassifier { feature_index, priors, densities, }
    }
}

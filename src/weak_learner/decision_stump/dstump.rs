//! Provides the decision stump weak learner.
use rand::Rng;

use crate::{
    Dataset,
    WeakLearner,
    WeightedSample,
};
use crate::constants::BASELINE_CUT_OFFSET;
use crate::weak_learner::core::choose_attribute;

use super::StumpClassifier;


/// The struct `DecisionStump` generates a [`StumpClassifier`]
/// for each call of `self.produce(..)`.
///
/// The stump works on one attribute chosen uniformly at random.
/// Every midpoint of two adjacent distinct values of the attribute
/// is a candidate cut. Each side of a cut predicts its
/// heaviest label under the current distribution,
/// and the cut with the largest correctly classified mass is kept.
/// Among cuts of equal mass the lowest one wins.
/// If no cut beats the no-split rule
/// (e.g., the attribute is constant),
/// the stump predicts the heaviest label everywhere.
///
/// # Example
/// ```no_run
/// use rand::prelude::*;
/// use weakboost::prelude::*;
///
/// let sample = Sample::from_rows(
///     &[[0.0], [1.0], [2.0], [3.0]], &[0, 0, 1, 1], 2
/// ).unwrap();
/// let weighted = WeightedSample::new(&sample).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let h = DecisionStump::init().produce(&weighted, &mut rng);
/// assert_eq!(h.threshold, 1.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionStump;


impl DecisionStump {
    /// Initializes the `DecisionStump` instance.
    pub fn init() -> Self {
        Self
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = StumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
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
        let n_classes = data.n_classes();
        let feature_index = choose_attribute(data, rng);

        let column = (0..data.n_examples())
            .map(|i| data.attribute_value(i, feature_index))
            .collect::<Vec<f64>>();
        let mut sorted = column.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));


        // The no-split rule. The cut lies below every value,
        // so both sides predict the heaviest label.
        let mut total = vec![0f64; n_classes];
        dist.iter()
            .enumerate()
            .for_each(|(i, d)| { total[data.class_label(i)] += *d; });
        let (label, mut best_mass) = heaviest_label(&total[..]);

        let mut stump = StumpClassifier {
            feature_index,
            threshold: sorted[0] - BASELINE_CUT_OFFSET,
            left_label: label,
            right_label: label,
            n_classes,
        };


        let mut left = vec![0f64; n_classes];
        let mut right = vec![0f64; n_classes];
        for pair in sorted.windows(2) {
            // Equal neighbors cannot separate any example.
            if pair[0] == pair[1] { continue; }
            let threshold = (pair[0] + pair[1]) / 2f64;

            left.iter_mut().for_each(|m| { *m = 0f64; });
            right.iter_mut().for_each(|m| { *m = 0f64; });
            column.iter()
                .zip(dist)
                .enumerate()
                .for_each(|(i, (x, d))| {
                    let y = data.class_label(i);
                    if *x < threshold {
                        left[y] += *d;
                    } else {
                        right[y] += *d;
                    }
                });

            let (left_label, left_mass) = heaviest_label(&left[..]);
            let (right_label, right_mass) = heaviest_label(&right[..]);

            if best_mass < left_mass + right_mass {
                best_mass = left_mass + right_mass;
                stump.threshold = threshold;
                stump.left_label = left_label;
                stump.right_label = right_label;
            }
        }

        stump
    }
}


/// Returns the first label with the largest mass and the mass.
/// Label `0` with mass `0` if every mass is zero.
#[inline(always)]
fn heaviest_label(mass: &[f64]) -> (usize, f64) {
    let mut best = (0_usize, 0f64);
    for (label, &m) in mass.iter().enumerate() {
        if best.1 < m {
            best = (label, m);
        }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heaviest_label_prefers_first() {
        assert_eq!(heaviest_label(&[0.2, 0.4, 0.4]), (1, 0.4));
        assert_eq!(heaviest_label(&[0.0, 0.0]), (0, 0.0));
    }
}

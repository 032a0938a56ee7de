//! The core library for the weak learner in the boosting protocol.
//!
//! The weak learner in the general boosting setting is as follows:
//!
//! Given a distribution over training examples,
//! the weak learner returns a hypothesis that is slightly better than
//! the random guessing with respect to the distribution.
//!
//! The weak learners in this crate pick one attribute at random
//! and fit a rule on it that minimizes the weighted training error.
use rand::Rng;

use crate::{
    Dataset,
    WeightedSample,
};


/// An interface that returns a hypothesis for a given distribution.
pub trait WeakLearner {
    /// Returned hypothesis generated by `self`.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis trained on `sample`
    /// under its current distribution.
    /// The randomness of the training (e.g., the attribute choice)
    /// is drawn from `rng` only.
    fn produce<D, R>(
        &self,
        sample: &WeightedSample<'_, D>,
        rng: &mut R,
    ) -> Self::Hypothesis
        where D: Dataset + ?Sized,
              R: Rng + ?Sized;
}


/// Picks one attribute uniformly at random.
#[inline]
pub(crate) fn choose_attribute<D, R>(data: &D, rng: &mut R) -> usize
    where D: Dataset + ?Sized,
          R: Rng + ?Sized,
{
    rng.gen_range(0..data.n_attributes())
}

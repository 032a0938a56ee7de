//! Tagged variants over the weak learners of this crate,
//! so that the kind of weak learner can be chosen at run time
//! while the boosting loop stays statically dispatched.
use rand::Rng;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    Classifier,
    Dataset,
    WeakLearner,
    WeightedSample,
};
use super::decision_stump::{DecisionStump, StumpClassifier};
use super::naive_bayes::{GaussianNB, GaussianClassifier};


/// The kind of weak learner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default,
    Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LearnerKind {
    /// Single-attribute threshold rule, see [`DecisionStump`].
    #[default]
    Stump,
    /// Single-attribute Gaussian density, see [`GaussianNB`].
    Gaussian,
}


impl LearnerKind {
    /// Returns the weak learner of this kind.
    pub fn learner(self) -> SimpleLearner {
        match self {
            Self::Stump => SimpleLearner::Stump(DecisionStump::init()),
            Self::Gaussian => SimpleLearner::Gaussian(GaussianNB::init()),
        }
    }
}


impl fmt::Display for LearnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stump => write!(f, "stump"),
            Self::Gaussian => write!(f, "gaussian"),
        }
    }
}


/// One of the weak learners of this crate.
#[derive(Debug, Clone, Copy)]
pub enum SimpleLearner {
    /// Decision stump.
    Stump(DecisionStump),
    /// Gaussian naive Bayes.
    Gaussian(GaussianNB),
}


impl From<LearnerKind> for SimpleLearner {
    fn from(kind: LearnerKind) -> Self {
        kind.learner()
    }
}


impl WeakLearner for SimpleLearner {
    type Hypothesis = SimpleClassifier;


    fn name(&self) -> &str {
        match self {
            Self::Stump(wl) => wl.name(),
            Self::Gaussian(wl) => wl.name(),
        }
    }


    fn produce<D, R>(
        &self,
        sample: &WeightedSample<'_, D>,
        rng: &mut R,
    ) -> Self::Hypothesis
        where D: Dataset + ?Sized,
              R: Rng + ?Sized,
    {
        match self {
            Self::Stump(wl) => {
                SimpleClassifier::Stump(wl.produce(sample, rng))
            },
            Self::Gaussian(wl) => {
                SimpleClassifier::Gaussian(wl.produce(sample, rng))
            },
        }
    }
}


/// A hypothesis returned by [`SimpleLearner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleClassifier {
    /// Decision stump.
    Stump(StumpClassifier),
    /// Gaussian naive Bayes.
    Gaussian(GaussianClassifier),
}


impl SimpleClassifier {
    /// Index of the attribute this hypothesis reads.
    pub fn feature_index(&self) -> usize {
        match self {
            Self::Stump(h) => h.feature_index,
            Self::Gaussian(h) => h.feature_index(),
        }
    }
}


impl Classifier for SimpleClassifier {
    fn n_classes(&self) -> usize {
        match self {
            Self::Stump(h) => h.n_classes(),
            Self::Gaussian(h) => h.n_classes(),
        }
    }


    fn predict(&self, example: &[f64]) -> usize {
        match self {
            Self::Stump(h) => h.predict(example),
            Self::Gaussian(h) => h.predict(example),
        }
    }


    fn predict_row<D>(&self, data: &D, row: usize) -> usize
        where D: Dataset + ?Sized,
    {
        match self {
            Self::Stump(h) => h.predict_row(data, row),
            Self::Gaussian(h) => h.predict_row(data, row),
        }
    }
}

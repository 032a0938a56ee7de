#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost over simple weak learners.
//!
//! In each round, `AdaBoost` asks a weak learner for a hypothesis
//! that is slightly better than random guessing
//! on the current distribution over the training examples,
//! gives the hypothesis a confidence weight,
//! and moves the weight of the distribution
//! toward the misclassified examples.
//! The combined hypothesis is the weighted majority vote
//! of the hypotheses.
//!
//! This crate includes two weak learners.
//! Both of them pick one attribute uniformly at random.
//!
//! - [`DecisionStump`]
//!     A threshold rule that minimizes the weighted error
//!     over the cuts between adjacent attribute values.
//!
//! - [`GaussianNB`]
//!     A naive Bayes classifier with a Gaussian density per class.
//!
//! # Example
//! ```no_run
//! use weakboost::prelude::*;
//!
//! let sample = SampleReader::default()
//!     .file("iris.csv")
//!     .has_header(true)
//!     .read()
//!     .unwrap();
//!
//! let mut booster: AdaBoost<'_, SimpleClassifier> = AdaBoost::init(&sample)
//!     .unwrap()
//!     .max_rounds(100)
//!     .stop_on_convergence(true);
//! let f = booster.run_with(LearnerKind::Stump).unwrap();
//!
//! let accuracy = f.test(&sample).unwrap();
//! println!("Training accuracy: {accuracy}");
//! ```

pub mod common;
pub mod booster;
pub mod hypothesis;
pub mod prelude;
pub mod research;
pub mod sample;
pub mod weak_learner;

mod constants;
mod error;


pub use common::utils::confidence_weight;

pub use error::{
    BoostError,
    Result,
};

pub use sample::{
    Dataset,
    Feature,
    Sample,
    SampleReader,
    WeightedSample,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};

pub use weak_learner::{
    WeakLearner,

    DecisionStump,
    StumpClassifier,

    Gaussian,
    GaussianNB,
    GaussianClassifier,

    LearnerKind,
    SimpleLearner,
    SimpleClassifier,
};

pub use booster::{
    Booster,
    AdaBoost,
    RoundReport,
};

pub use research::{
    CurrentHypothesis,
    Experiment,
    Logger,
    RunConfig,
    Scheme,
    SchemeKind,
    Summary,
};

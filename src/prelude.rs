//! Exports the standard boosting algorithm, weak learners, and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
    RoundReport,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision stump
    DecisionStump,
    StumpClassifier,

    // Naive Bayes
    GaussianNB,
    GaussianClassifier,

    // Run-time choice
    LearnerKind,
    SimpleLearner,
    SimpleClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Dataset,
    Sample,
    SampleReader,
    WeightedSample,
};


pub use crate::research::{
    Experiment,
    RunConfig,
    Scheme,
};


pub use crate::error::BoostError;

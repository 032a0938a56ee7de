//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;

/// Defines Naive Bayes.
pub mod naive_bayes;

/// Defines the run-time choice among the weak learners.
pub mod simple;


pub use self::core::WeakLearner;

pub use self::decision_stump::{
    DecisionStump,
    StumpClassifier,
};

pub use self::naive_bayes::{
    Gaussian,
    GaussianNB,
    GaussianClassifier,
};

pub use self::simple::{
    LearnerKind,
    SimpleLearner,
    SimpleClassifier,
};

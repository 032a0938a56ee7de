/// Defines Naive Bayes weak learner.
mod nbayes;
/// Defines Naive Bayes Classifiers returned by `GaussianNB`.
mod nbayes_classifier;

/// Defines probability density functions.
mod probability;

pub use nbayes::GaussianNB;
pub use nbayes_classifier::GaussianClassifier;
pub use probability::Gaussian;

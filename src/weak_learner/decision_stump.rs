/// Defines the decision stump weak learner.
mod dstump;
/// Defines the stump classifier returned by `DecisionStump`.
mod dstump_classifier;

pub use dstump::DecisionStump;
pub use dstump_classifier::StumpClassifier;

//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per round
//! - Weighted error and confidence weight
//! - Training accuracy
//! - Test accuracy
//! - Running time
//!
//! and repeat a boosting algorithm over several random splits.

/// Defines `Logger` that runs a boosting algorithm with logging.
pub mod logger;

/// Defines the run configuration.
pub mod config;

/// Defines repeated experiments.
pub mod experiment;


pub use logger::{
    CurrentHypothesis,
    Logger,
};

pub use config::{
    RunConfig,
    SchemeKind,
};

pub use experiment::{
    Experiment,
    Scheme,
    Summary,
};

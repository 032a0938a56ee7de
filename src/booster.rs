//! Provides the boosting algorithm.

mod core;
mod adaboost;


/// Booster trait
pub use self::core::Booster;

pub use self::adaboost::{
    AdaBoost,
    RoundReport,
};

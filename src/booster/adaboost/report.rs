use serde::{Serialize, Deserialize};

use std::fmt;


/// Statistics of one boosting round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 0-based round index.
    pub round: usize,
    /// Weighted error of the new hypothesis, at least `1e-6`.
    pub weighted_error: f64,
    /// Confidence weight assigned to the new hypothesis.
    pub confidence: f64,
    /// Unweighted training accuracy of the new hypothesis alone.
    pub weak_accuracy: f64,
    /// Unweighted training accuracy of the ensemble so far.
    pub ensemble_accuracy: f64,
}


impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {}: error = {:.6}, confidence = {:.6}, \
             weak accuracy = {:.4}, ensemble accuracy = {:.4}",
            self.round,
            self.weighted_error,
            self.confidence,
            self.weak_accuracy,
            self.ensemble_accuracy,
        )
    }
}

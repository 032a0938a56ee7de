use serde::{
    Serialize,
    Deserialize,
};

use crate::constants::SIGMA_FLOOR;


/// Gaussian density over a single attribute.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Gaussian {
    /// Mean.
    pub mu: f64,
    /// Standard deviation, at least `SIGMA_FLOOR`.
    pub sigma: f64,
}


impl Gaussian {
    /// Construct a new density.
    /// A (nearly) degenerate `sigma` is replaced by `SIGMA_FLOOR`.
    pub(super) fn new(mu: f64, sigma: f64) -> Self {
        let sigma = if sigma.is_finite() && sigma >= SIGMA_FLOOR {
            sigma
        } else {
            SIGMA_FLOOR
        };
        Self { mu, sigma }
    }


    /// Logarithm of the density at `x`, up to the constant
    /// `-0.5 * ln(2 * PI)` shared by every class.
    #[inline(always)]
    pub fn log_pseudo_density(&self, x: f64) -> f64 {
        let diff = x - self.mu;
        - self.sigma.ln() - diff * diff / (2f64 * self.sigma * self.sigma)
    }
}

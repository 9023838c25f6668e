//! Valuation output.

use serde::{Deserialize, Serialize};

/// Option value and its first two spot sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Valuation {
    /// Present value of the option.
    pub price: f64,
    /// First derivative of the price with respect to spot.
    pub delta: f64,
    /// Second derivative of the price with respect to spot.
    pub gamma: f64,
}

impl Valuation {
    /// Creates a new valuation.
    #[must_use]
    pub fn new(price: f64, delta: f64, gamma: f64) -> Self {
        Self {
            price,
            delta,
            gamma,
        }
    }

    /// Returns true if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.delta.is_finite() && self.gamma.is_finite()
    }
}

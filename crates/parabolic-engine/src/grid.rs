//! Option values on the spatial grid.

use std::ops::Index;

use serde::Serialize;

use crate::sizing::GridSpec;

/// Option values at nodes `j * dS`, `j = 0..=N`, for a single time layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueGrid {
    values: Vec<f64>,
}

impl ValueGrid {
    /// Call payoff `max(S - K, 0)` at every node: the layer at maturity.
    pub fn call_payoff(spec: &GridSpec, strike: f64) -> Self {
        let values = (0..spec.node_count())
            .map(|j| (spec.price_at(j) - strike).max(0.0))
            .collect();
        Self { values }
    }

    pub(crate) fn from_vec(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Node values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the grid has no nodes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of spatial intervals, `len() - 1`.
    pub fn spatial_steps(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Value at the zero-price node.
    pub fn lower_boundary(&self) -> f64 {
        self.values[0]
    }

    /// Value at the price-ceiling node.
    pub fn upper_boundary(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Consumes the grid, returning the node values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for ValueGrid {
    type Output = f64;

    fn index(&self, j: usize) -> &f64 {
        &self.values[j]
    }
}

//! Grid step sizing under the explicit-scheme stability bound.
//!
//! The price domain is truncated at `S_max = 4 K`. Given `N` spatial
//! intervals, the time step is the smaller of the stability bound
//!
//! ```text
//! dt_stable = dS^2 / (sigma^2 * S_max^2)
//! ```
//!
//! and a resolution cap `T / min_time_steps`, which keeps a minimum number of
//! time layers when volatility is so low that the stability bound alone would
//! allow very few steps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use parabolic_core::ParameterSet;

use crate::error::{EngineError, EngineResult};

/// Upper bound of the price domain as a multiple of the strike.
pub const PRICE_CEILING_MULTIPLE: f64 = 4.0;

/// Default minimum number of time layers (`dt <= T / 100`).
pub const DEFAULT_MIN_TIME_STEPS: u32 = 100;

/// Discretization of the price/time domain for one pricing run.
///
/// Produced by [`GridStepSizer::size`]; the fields are read-only so a sized
/// grid cannot drift out of its invariants after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    price_ceiling: f64,
    spatial_steps: usize,
    spatial_step_size: f64,
    temporal_steps: usize,
    temporal_step_size: f64,
}

impl GridSpec {
    /// Assembles a grid from explicit parts without applying any stability
    /// policy.
    ///
    /// Intended for callers that bring their own time stepping. The solver
    /// still checks the stability bound before using it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidGrid` if any size is non-positive.
    pub fn from_parts(
        price_ceiling: f64,
        spatial_steps: usize,
        temporal_step_size: f64,
        temporal_steps: usize,
    ) -> EngineResult<Self> {
        if !(price_ceiling.is_finite() && price_ceiling > 0.0) {
            return Err(EngineError::invalid_grid(format!(
                "price ceiling must be positive, got {price_ceiling}"
            )));
        }
        if spatial_steps == 0 || temporal_steps == 0 {
            return Err(EngineError::invalid_grid(
                "step counts must be at least 1",
            ));
        }
        if !(temporal_step_size.is_finite() && temporal_step_size > 0.0) {
            return Err(EngineError::invalid_grid(format!(
                "time step must be positive, got {temporal_step_size}"
            )));
        }

        Ok(Self {
            price_ceiling,
            spatial_steps,
            spatial_step_size: price_ceiling / spatial_steps as f64,
            temporal_steps,
            temporal_step_size,
        })
    }

    /// Truncated upper bound of the price domain, `S_max`.
    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    /// Number of spatial intervals, `N`.
    pub fn spatial_steps(&self) -> usize {
        self.spatial_steps
    }

    /// Spatial step, `dS = S_max / N`.
    pub fn spatial_step_size(&self) -> f64 {
        self.spatial_step_size
    }

    /// Number of time steps, `M`.
    pub fn temporal_steps(&self) -> usize {
        self.temporal_steps
    }

    /// Time step, `dt`.
    pub fn temporal_step_size(&self) -> f64 {
        self.temporal_step_size
    }

    /// Number of grid nodes, `N + 1`.
    pub fn node_count(&self) -> usize {
        self.spatial_steps + 1
    }

    /// Underlying price at node `j`.
    pub fn price_at(&self, j: usize) -> f64 {
        j as f64 * self.spatial_step_size
    }

    /// Largest stable time step, `dS^2 / (sigma^2 * S_max^2)`.
    pub fn stability_bound(&self, volatility: f64) -> f64 {
        let ds = self.spatial_step_size;
        (ds * ds) / (volatility * volatility * self.price_ceiling * self.price_ceiling)
    }

    /// Returns true if the time step satisfies the stability bound.
    pub fn is_stable(&self, volatility: f64) -> bool {
        self.temporal_step_size <= self.stability_bound(volatility)
    }

    /// Time to maturity remaining once step `step` (0-based, counted away
    /// from maturity) has been applied.
    ///
    /// The last step ends exactly at `maturity`.
    pub fn remaining_time_after(&self, step: usize, maturity: f64) -> f64 {
        let layers_left = self.temporal_steps - 1 - step;
        maturity - layers_left as f64 * self.temporal_step_size
    }
}

/// Derives a [`GridSpec`] from contract parameters and a spatial resolution.
///
/// # Example
///
/// ```rust
/// use parabolic_core::{OptionType, ParameterSet};
/// use parabolic_engine::GridStepSizer;
///
/// let params = ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
/// let spec = GridStepSizer::default().size(&params, 100);
///
/// assert_eq!(spec.price_ceiling(), 540.0);
/// assert_eq!(spec.temporal_steps(), 401);
/// assert!(spec.is_stable(params.volatility()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStepSizer {
    min_time_steps: u32,
}

impl Default for GridStepSizer {
    fn default() -> Self {
        Self {
            min_time_steps: DEFAULT_MIN_TIME_STEPS,
        }
    }
}

impl GridStepSizer {
    /// Creates a sizer with the default resolution cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the minimum number of time layers.
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub fn with_min_time_steps(mut self, min_time_steps: u32) -> Self {
        self.min_time_steps = min_time_steps.max(1);
        self
    }

    /// Minimum number of time layers enforced by the cap.
    pub fn min_time_steps(&self) -> u32 {
        self.min_time_steps
    }

    /// Sizes the grid for `spatial_steps` intervals.
    ///
    /// `spatial_steps` must be positive; the caller validates it.
    pub fn size(&self, params: &ParameterSet, spatial_steps: usize) -> GridSpec {
        let s_max = PRICE_CEILING_MULTIPLE * params.strike();
        let ds = s_max / spatial_steps as f64;
        let sigma = params.volatility();

        let dt_stable = (ds * ds) / (sigma * sigma * s_max * s_max);
        let dt_resolution = params.maturity() / f64::from(self.min_time_steps);
        let dt = dt_stable.min(dt_resolution);
        let temporal_steps = (params.maturity() / dt).floor() as usize + 1;

        debug!(
            spatial_steps,
            temporal_steps,
            dt,
            dt_stable,
            price_ceiling = s_max,
            "Sized finite-difference grid"
        );

        GridSpec {
            price_ceiling: s_max,
            spatial_steps,
            spatial_step_size: ds,
            temporal_steps,
            temporal_step_size: dt,
        }
    }
}

/// Sizes a grid with the default [`GridStepSizer`].
pub fn size_grid(params: &ParameterSet, spatial_steps: usize) -> GridSpec {
    GridStepSizer::default().size(params, spatial_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parabolic_core::OptionType;

    fn params(vol: f64, maturity: f64) -> ParameterSet {
        ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, vol, maturity).unwrap()
    }

    #[test]
    fn test_reference_grid() {
        let spec = size_grid(&params(0.2, 1.0), 100);

        assert_relative_eq!(spec.price_ceiling(), 540.0);
        assert_relative_eq!(spec.spatial_step_size(), 5.4, epsilon = 1e-12);
        assert_relative_eq!(spec.temporal_step_size(), 0.0025, epsilon = 1e-15);
        assert_eq!(spec.temporal_steps(), 401);
        assert_eq!(spec.node_count(), 101);
    }

    #[test]
    fn test_stability_bound_binds_at_fine_resolution() {
        let p = params(0.2, 1.0);
        let spec = size_grid(&p, 2000);

        assert_relative_eq!(spec.temporal_step_size(), 6.25e-6, max_relative = 1e-12);
        assert_eq!(spec.temporal_step_size(), spec.stability_bound(p.volatility()));
        assert!(spec.is_stable(p.volatility()));
    }

    #[test]
    fn test_resolution_cap_binds_at_low_volatility() {
        let p = params(0.05, 2.0);
        let spec = size_grid(&p, 100);

        // Stability alone would allow dt = 0.04, i.e. only 50 layers.
        assert_relative_eq!(spec.stability_bound(p.volatility()), 0.04, epsilon = 1e-12);
        assert_relative_eq!(spec.temporal_step_size(), 0.02, epsilon = 1e-15);
        assert_eq!(spec.temporal_steps(), 101);
        assert!(spec.is_stable(p.volatility()));
    }

    #[test]
    fn test_min_time_steps_override() {
        let p = params(0.05, 2.0);
        let spec = GridStepSizer::new().with_min_time_steps(400).size(&p, 100);

        assert_relative_eq!(spec.temporal_step_size(), 0.005, epsilon = 1e-15);
        assert_eq!(spec.temporal_steps(), 401);
        assert_eq!(GridStepSizer::new().with_min_time_steps(0).min_time_steps(), 1);
    }

    #[test]
    fn test_remaining_time_schedule() {
        let p = params(0.2, 1.0);
        let spec = size_grid(&p, 100);
        let last = spec.temporal_steps() - 1;

        assert_relative_eq!(spec.remaining_time_after(last, 1.0), 1.0);
        assert_relative_eq!(
            spec.remaining_time_after(last - 1, 1.0),
            1.0 - 0.0025,
            epsilon = 1e-12
        );
        assert!(spec.remaining_time_after(0, 1.0) >= -1e-12);
    }

    #[test]
    fn test_from_parts_validation() {
        assert!(GridSpec::from_parts(540.0, 0, 0.001, 10).is_err());
        assert!(GridSpec::from_parts(540.0, 10, 0.0, 10).is_err());
        assert!(GridSpec::from_parts(-1.0, 10, 0.001, 10).is_err());
        assert!(GridSpec::from_parts(540.0, 10, 0.001, 0).is_err());

        let spec = GridSpec::from_parts(540.0, 10, 0.001, 10).unwrap();
        assert_relative_eq!(spec.spatial_step_size(), 54.0);
        assert_relative_eq!(spec.price_at(3), 162.0);
    }
}

//! End-to-end pricing: size, solve, read off, adjust.

use serde::Serialize;
use tracing::info;

use parabolic_core::{OptionType, ParameterSet, Valuation};

use crate::error::{EngineError, EngineResult};
use crate::interpolator::ValueInterpolator;
use crate::parity::adjust_for_put;
use crate::sizing::{GridSpec, GridStepSizer};
use crate::solver::ExplicitSolver;

/// Result of one pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingReport {
    /// Instrument that was priced.
    pub option_type: OptionType,
    /// Spot the grid was read at.
    pub spot: f64,
    /// Price and Greeks of `option_type`.
    pub valuation: Valuation,
    /// Call values read off the grid, before any parity adjustment.
    pub call_valuation: Valuation,
    /// Grid the run was solved on.
    pub grid: GridSpec,
}

impl PricingReport {
    /// Time step used by the run, `dt`.
    pub fn dt(&self) -> f64 {
        self.grid.temporal_step_size()
    }

    /// Number of time steps taken, `M`.
    pub fn time_steps(&self) -> usize {
        self.grid.temporal_steps()
    }

    /// Number of spatial intervals, `N`.
    pub fn spatial_steps(&self) -> usize {
        self.grid.spatial_steps()
    }
}

/// Prices European options at a fixed spatial resolution.
///
/// # Example
///
/// ```rust
/// use parabolic_core::{OptionType, ParameterSet};
/// use parabolic_engine::FiniteDifferencePricer;
///
/// let params = ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
/// let report = FiniteDifferencePricer::new(100).unwrap().price(&params).unwrap();
///
/// assert_eq!(report.time_steps(), 401);
/// assert!((report.valuation.price - 1.18).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiniteDifferencePricer {
    sizer: GridStepSizer,
    solver: ExplicitSolver,
    spatial_steps: usize,
}

impl FiniteDifferencePricer {
    /// Creates a pricer with `spatial_steps` price intervals and the default
    /// sizer.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidGrid` if `spatial_steps` is zero.
    pub fn new(spatial_steps: usize) -> EngineResult<Self> {
        if spatial_steps == 0 {
            return Err(EngineError::invalid_grid(
                "spatial step count must be at least 1",
            ));
        }
        Ok(Self {
            sizer: GridStepSizer::default(),
            solver: ExplicitSolver::new(),
            spatial_steps,
        })
    }

    /// Replaces the grid sizer.
    #[must_use]
    pub fn with_sizer(mut self, sizer: GridStepSizer) -> Self {
        self.sizer = sizer;
        self
    }

    /// Number of spatial intervals used per run.
    pub fn spatial_steps(&self) -> usize {
        self.spatial_steps
    }

    /// The grid sizer.
    pub fn sizer(&self) -> &GridStepSizer {
        &self.sizer
    }

    /// Grid that [`price`](Self::price) would solve on.
    pub fn grid_for(&self, params: &ParameterSet) -> GridSpec {
        self.sizer.size(params, self.spatial_steps)
    }

    /// Prices `params` at its spot.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StabilityViolation` if the sized grid is
    /// unstable, which the default sizer never produces.
    pub fn price(&self, params: &ParameterSet) -> EngineResult<PricingReport> {
        let grid = self.grid_for(params);
        let values = self.solver.solve(params, &grid)?;
        let call_valuation = ValueInterpolator::new(&values, &grid)?.evaluate(params.spot());
        let valuation = adjust_for_put(call_valuation, params);

        info!(
            option_type = %params.option_type(),
            spatial_steps = grid.spatial_steps(),
            temporal_steps = grid.temporal_steps(),
            price = valuation.price,
            "Priced option"
        );

        Ok(PricingReport {
            option_type: params.option_type(),
            spot: params.spot(),
            valuation,
            call_valuation,
            grid,
        })
    }
}

//! Explicit finite-difference solver for the Black-Scholes PDE.
//!
//! Writing `V_j^m` for the option value at `S = j dS` and the `m`-th layer
//! away from maturity, one backward step is
//!
//! ```text
//! V_j^{m+1} = a_j V_{j-1}^m + b_j V_j^m + c_j V_{j+1}^m
//!
//! alpha_j = sigma^2 S_j^2 dt / (2 dS^2)
//! beta_j  = r S_j dt / (2 dS)
//! a_j = alpha_j - beta_j,  b_j = 1 - r dt - 2 alpha_j,  c_j = alpha_j + beta_j
//! ```
//!
//! with boundary values `V_0 = 0` and `V_N = S_max - K exp(-r tau)`.
//!
//! The layer being read and the layer being written are separate buffers
//! that swap ownership after every step, so no update ever observes a
//! neighbour that has already moved to the next layer.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use parabolic_core::ParameterSet;

use crate::error::{EngineError, EngineResult};
use crate::grid::ValueGrid;
use crate::sizing::GridSpec;

/// Recurrence weights for one interior node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCoefficients {
    /// Weight of the left neighbour, `a`.
    pub lower: f64,
    /// Weight of the node itself, `b`.
    pub diagonal: f64,
    /// Weight of the right neighbour, `c`.
    pub upper: f64,
}

impl StepCoefficients {
    /// Coefficients at node `j`.
    pub fn at(params: &ParameterSet, spec: &GridSpec, j: usize) -> Self {
        let ds = spec.spatial_step_size();
        let dt = spec.temporal_step_size();
        let sigma = params.volatility();
        let r = params.rate();
        let s = j as f64 * ds;

        let alpha = (sigma * sigma * s * s * dt) / (2.0 * ds * ds);
        let beta = (r * s * dt) / (2.0 * ds);

        Self {
            lower: alpha - beta,
            diagonal: 1.0 - r * dt - 2.0 * alpha,
            upper: alpha + beta,
        }
    }

    #[inline]
    fn apply(&self, left: f64, centre: f64, right: f64) -> f64 {
        self.lower * left + self.diagonal * centre + self.upper * right
    }
}

/// A completed time layer, reported to solve observers.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    /// 0-based step index; step 0 is the first step away from maturity.
    pub step: usize,
    /// Time to maturity at the end of this step.
    pub tau_remaining: f64,
    /// The new layer, boundary nodes included.
    pub values: &'a [f64],
}

/// Marches the value grid from maturity back to the present.
///
/// # Example
///
/// ```rust
/// use parabolic_core::{OptionType, ParameterSet};
/// use parabolic_engine::{size_grid, ExplicitSolver};
///
/// let params = ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
/// let spec = size_grid(&params, 100);
/// let grid = ExplicitSolver::new().solve(&params, &spec).unwrap();
///
/// assert_eq!(grid.len(), 101);
/// assert_eq!(grid.lower_boundary(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplicitSolver;

impl ExplicitSolver {
    /// Creates a solver.
    pub fn new() -> Self {
        Self
    }

    /// Solves for the call value grid at time 0.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StabilityViolation` if the grid's time step
    /// exceeds the stability bound. Nothing is stepped in that case.
    pub fn solve(&self, params: &ParameterSet, spec: &GridSpec) -> EngineResult<ValueGrid> {
        self.solve_with_observer(params, spec, |_| {})
    }

    /// Solves like [`solve`](Self::solve), calling `observer` after every
    /// completed step.
    pub fn solve_with_observer<F>(
        &self,
        params: &ParameterSet,
        spec: &GridSpec,
        mut observer: F,
    ) -> EngineResult<ValueGrid>
    where
        F: FnMut(StepEvent<'_>),
    {
        let bound = spec.stability_bound(params.volatility());
        if !spec.is_stable(params.volatility()) {
            return Err(EngineError::stability_violation(
                spec.temporal_step_size(),
                bound,
            ));
        }

        let n = spec.spatial_steps();
        let strike = params.strike();
        let rate = params.rate();
        let s_max = spec.price_ceiling();

        let coefficients: Vec<StepCoefficients> = (1..n)
            .map(|j| StepCoefficients::at(params, spec, j))
            .collect();

        let mut current = ValueGrid::call_payoff(spec, strike).into_vec();
        let mut next = vec![0.0_f64; n + 1];

        debug!(
            spatial_steps = n,
            temporal_steps = spec.temporal_steps(),
            dt = spec.temporal_step_size(),
            "Starting explicit finite-difference march"
        );

        for step in 0..spec.temporal_steps() {
            step_interior(&coefficients, &current, &mut next);

            let tau = spec.remaining_time_after(step, params.maturity());
            next[0] = 0.0;
            next[n] = s_max - strike * (-rate * tau).exp();

            observer(StepEvent {
                step,
                tau_remaining: tau,
                values: &next,
            });

            std::mem::swap(&mut current, &mut next);
        }

        debug!(
            lower = current[0],
            upper = current[n],
            "Finished explicit finite-difference march"
        );

        Ok(ValueGrid::from_vec(current))
    }
}

/// Writes interior nodes of `next` from `previous`.
#[cfg(not(feature = "parallel"))]
fn step_interior(coefficients: &[StepCoefficients], previous: &[f64], next: &mut [f64]) {
    for (offset, coeff) in coefficients.iter().enumerate() {
        let j = offset + 1;
        next[j] = coeff.apply(previous[j - 1], previous[j], previous[j + 1]);
    }
}

/// Writes interior nodes of `next` from `previous`, one task per node chunk.
#[cfg(feature = "parallel")]
fn step_interior(coefficients: &[StepCoefficients], previous: &[f64], next: &mut [f64]) {
    let interior = next.len() - 1;
    next[1..interior]
        .par_iter_mut()
        .zip(coefficients.par_iter())
        .enumerate()
        .for_each(|(offset, (value, coeff))| {
            let j = offset + 1;
            *value = coeff.apply(previous[j - 1], previous[j], previous[j + 1]);
        });
}

/// Solves with a default [`ExplicitSolver`].
pub fn solve(params: &ParameterSet, spec: &GridSpec) -> EngineResult<ValueGrid> {
    ExplicitSolver::new().solve(params, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::size_grid;
    use approx::assert_relative_eq;
    use parabolic_core::OptionType;

    fn reference() -> ParameterSet {
        ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap()
    }

    #[test]
    fn test_coefficients_sum() {
        // a + b + c = 1 - r dt at every node
        let p = reference();
        let spec = size_grid(&p, 100);
        for j in 1..100 {
            let c = StepCoefficients::at(&p, &spec, j);
            assert_relative_eq!(
                c.lower + c.diagonal + c.upper,
                1.0 - p.rate() * spec.temporal_step_size(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_rejects_unstable_grid() {
        let p = reference();
        let sized = size_grid(&p, 100);
        let unstable = GridSpec::from_parts(
            sized.price_ceiling(),
            sized.spatial_steps(),
            sized.temporal_step_size() * 4.0,
            100,
        )
        .unwrap();

        let mut steps_seen = 0;
        let err = ExplicitSolver::new()
            .solve_with_observer(&p, &unstable, |_| steps_seen += 1)
            .unwrap_err();

        assert!(matches!(err, EngineError::StabilityViolation { .. }));
        assert_eq!(steps_seen, 0);
    }

    #[test]
    fn test_observer_sees_every_step() {
        let p = reference();
        let spec = size_grid(&p, 50);
        let mut steps = Vec::new();
        ExplicitSolver::new()
            .solve_with_observer(&p, &spec, |event| steps.push(event.step))
            .unwrap();

        assert_eq!(steps.len(), spec.temporal_steps());
        assert_eq!(steps.first(), Some(&0));
        assert_eq!(steps.last(), Some(&(spec.temporal_steps() - 1)));
    }

    #[test]
    fn test_single_interval_grid() {
        // With N = 1 there are no interior nodes; only boundaries move.
        let p = reference();
        let spec = size_grid(&p, 1);
        let grid = solve(&p, &spec).unwrap();

        assert_eq!(grid.len(), 2);
        assert_relative_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[1], 540.0 - 135.0 * (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_values_stay_finite_and_nonnegative() {
        let p = reference();
        let spec = size_grid(&p, 200);
        let grid = solve(&p, &spec).unwrap();

        for &v in grid.values() {
            assert!(v.is_finite());
            assert!(v > -1e-9, "negative call value {v}");
        }
    }
}

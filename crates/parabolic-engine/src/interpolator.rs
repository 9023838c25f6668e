//! Price and Greeks read off a solved grid.

use parabolic_core::Valuation;
use parabolic_math::differences::{central_first, central_second};
use parabolic_math::interpolation::{GridLocation, UniformGrid, UniformLinearInterpolator};

use crate::error::{EngineError, EngineResult};
use crate::grid::ValueGrid;
use crate::sizing::GridSpec;

/// Reads call values at arbitrary spot prices from a time-0 grid.
///
/// - Price: linear interpolation between the bracketing nodes, clamped to the
///   edge node outside `[0, S_max)`.
/// - Delta and Gamma: central differences around the node left of the spot,
///   and zero when that node is a boundary node or the spot is off the grid.
#[derive(Debug, Clone, Copy)]
pub struct ValueInterpolator<'a> {
    interp: UniformLinearInterpolator<'a>,
}

impl<'a> ValueInterpolator<'a> {
    /// Binds a solved grid to the [`GridSpec`] it was solved on.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::GridMismatch` if the grid does not have one
    /// value per node of `spec`.
    pub fn new(grid: &'a ValueGrid, spec: &GridSpec) -> EngineResult<Self> {
        if grid.len() != spec.node_count() {
            return Err(EngineError::GridMismatch {
                expected: spec.node_count(),
                actual: grid.len(),
            });
        }

        let nodes = UniformGrid::new(spec.spatial_step_size(), spec.spatial_steps())?;
        let interp = UniformLinearInterpolator::new(nodes, grid.values())?;
        Ok(Self { interp })
    }

    /// Call price, Delta and Gamma at `spot`.
    pub fn evaluate(&self, spot: f64) -> Valuation {
        let price = self.interp.interpolate(spot);
        let nodes = self.interp.grid();
        let values = self.interp.values();

        let (delta, gamma) = match nodes.locate(spot) {
            GridLocation::Within { index, .. } => (
                central_first(values, index, nodes.step()).unwrap_or(0.0),
                central_second(values, index, nodes.step()).unwrap_or(0.0),
            ),
            GridLocation::Below | GridLocation::AtOrAbove => (0.0, 0.0),
        };

        Valuation::new(price, delta, gamma)
    }
}

/// Evaluates call price and Greeks at `spot`.
pub fn evaluate(grid: &ValueGrid, spec: &GridSpec, spot: f64) -> EngineResult<Valuation> {
    Ok(ValueInterpolator::new(grid, spec)?.evaluate(spot))
}

//! Linear interpolation on a uniform grid.

use super::{GridLocation, UniformGrid};
use crate::error::{MathError, MathResult};

/// Piecewise-linear reads of node values on a [`UniformGrid`].
///
/// Borrows the values rather than copying them, so it can be built cheaply
/// over a solver's output.
///
/// # Example
///
/// ```rust
/// use parabolic_math::interpolation::{UniformGrid, UniformLinearInterpolator};
///
/// let grid = UniformGrid::new(1.0, 3).unwrap();
/// let values = [0.0, 1.0, 4.0, 9.0];
/// let interp = UniformLinearInterpolator::new(grid, &values).unwrap();
///
/// assert_eq!(interp.interpolate(1.5), 2.5);
/// assert_eq!(interp.interpolate(7.0), 9.0); // clamped to the last node
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniformLinearInterpolator<'a> {
    grid: UniformGrid,
    values: &'a [f64],
}

impl<'a> UniformLinearInterpolator<'a> {
    /// Creates an interpolator over `values`, one per grid node.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` if `values.len()` differs from
    /// the grid's node count.
    pub fn new(grid: UniformGrid, values: &'a [f64]) -> MathResult<Self> {
        if values.len() != grid.node_count() {
            return Err(MathError::dimension_mismatch(
                grid.node_count(),
                values.len(),
            ));
        }
        Ok(Self { grid, values })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// The node values.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Value at `x`, clamped to the edge nodes outside the grid.
    pub fn interpolate(&self, x: f64) -> f64 {
        match self.grid.locate(x) {
            GridLocation::Below => self.values[0],
            GridLocation::Within { index, weight } => {
                (1.0 - weight) * self.values[index] + weight * self.values[index + 1]
            }
            GridLocation::AtOrAbove => self.values[self.grid.intervals()],
        }
    }
}

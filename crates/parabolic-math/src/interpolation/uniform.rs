//! Uniform grid geometry.

use crate::error::{MathError, MathResult};

/// Position of a query point relative to a [`UniformGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridLocation {
    /// The point lies left of the first node (or is not a number).
    Below,
    /// The point lies in `[x_index, x_index+1)` at fractional offset `weight`.
    Within {
        /// Index of the left node of the bracketing interval.
        index: usize,
        /// Fractional distance from the left node, in `[0, 1)`.
        weight: f64,
    },
    /// The point lies on or beyond the last node.
    AtOrAbove,
}

/// Nodes `x_j = j * step` for `j` in `0..=intervals`.
///
/// # Example
///
/// ```rust
/// use parabolic_math::interpolation::{GridLocation, UniformGrid};
///
/// let grid = UniformGrid::new(5.4, 100).unwrap();
/// assert_eq!(grid.node_count(), 101);
///
/// match grid.locate(100.0) {
///     GridLocation::Within { index, .. } => assert_eq!(index, 18),
///     other => panic!("unexpected location {other:?}"),
/// }
/// assert_eq!(grid.locate(540.0), GridLocation::AtOrAbove);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
    step: f64,
    intervals: usize,
}

impl UniformGrid {
    /// Creates a grid with the given spacing and number of intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not a positive finite number or if
    /// `intervals` is zero.
    pub fn new(step: f64, intervals: usize) -> MathResult<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(MathError::invalid_input(format!(
                "grid step must be positive and finite, got {step}"
            )));
        }
        if intervals == 0 {
            return Err(MathError::insufficient_data(1, 0));
        }
        Ok(Self { step, intervals })
    }

    /// Node spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of intervals between the first and last node.
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Number of nodes, `intervals + 1`.
    pub fn node_count(&self) -> usize {
        self.intervals + 1
    }

    /// Coordinate of node `j`.
    pub fn node(&self, j: usize) -> f64 {
        j as f64 * self.step
    }

    /// Locates `x` relative to the nodes.
    pub fn locate(&self, x: f64) -> GridLocation {
        let idx = x / self.step;
        if !(idx >= 0.0) {
            return GridLocation::Below;
        }

        let floor = idx.floor();
        if floor >= self.intervals as f64 {
            return GridLocation::AtOrAbove;
        }

        GridLocation::Within {
            index: floor as usize,
            weight: idx - floor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(UniformGrid::new(0.0, 10).is_err());
        assert!(UniformGrid::new(-1.0, 10).is_err());
        assert!(UniformGrid::new(f64::INFINITY, 10).is_err());
        assert!(UniformGrid::new(1.0, 0).is_err());
    }

    #[test]
    fn test_locate_on_node() {
        let grid = UniformGrid::new(0.5, 4).unwrap();
        assert_eq!(
            grid.locate(1.0),
            GridLocation::Within {
                index: 2,
                weight: 0.0
            }
        );
        assert_eq!(
            grid.locate(0.0),
            GridLocation::Within {
                index: 0,
                weight: 0.0
            }
        );
    }

    #[test]
    fn test_locate_edges() {
        let grid = UniformGrid::new(0.5, 4).unwrap();
        assert_eq!(grid.locate(-0.1), GridLocation::Below);
        assert_eq!(grid.locate(f64::NAN), GridLocation::Below);
        assert_eq!(grid.locate(2.0), GridLocation::AtOrAbove);
        assert_eq!(grid.locate(100.0), GridLocation::AtOrAbove);
    }

    #[test]
    fn test_locate_fractional() {
        let grid = UniformGrid::new(0.5, 4).unwrap();
        match grid.locate(1.2) {
            GridLocation::Within { index, weight } => {
                assert_eq!(index, 2);
                assert_relative_eq!(weight, 0.4, epsilon = 1e-12);
            }
            other => panic!("unexpected location {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_within_brackets_point(x in 0.0f64..99.999, step in 0.01f64..10.0) {
            let grid = UniformGrid::new(step, 10_000).unwrap();
            if let GridLocation::Within { index, weight } = grid.locate(x) {
                prop_assert!((0.0..1.0).contains(&weight));
                prop_assert!(index < grid.intervals());
                prop_assert!(grid.node(index) <= x + 1e-9);
            } else {
                prop_assert!(false, "point inside grid was not located within");
            }
        }
    }
}

//! Interpolation on uniformly spaced grids.
//!
//! Finite-difference solvers produce values on nodes `x_j = j * h` for
//! `j = 0..=n`. This module locates arbitrary query points on such a grid and
//! reads values off it:
//!
//! - [`UniformGrid`]: node spacing and count, plus point location
//! - [`GridLocation`]: where a query point falls relative to the nodes
//! - [`UniformLinearInterpolator`]: piecewise-linear reads with edge clamping
//!
//! Queries never extrapolate. A point left of the first node resolves to the
//! first node's value and a point at or beyond the last node resolves to the
//! last node's value.

mod linear;
mod uniform;

pub use linear::UniformLinearInterpolator;
pub use uniform::{GridLocation, UniformGrid};

//! # Parabolic Math
//!
//! Numerical utilities for the Parabolic finite-difference option pricer.
//!
//! This crate provides:
//!
//! - **Interpolation**: Location and linear interpolation on uniform grids
//!   with edge clamping
//! - **Differences**: Central finite-difference stencils for first and
//!   second derivatives
//! - **Distributions**: Standard normal CDF/PDF used by closed-form references
//!
//! ## Design Philosophy
//!
//! - **No Extrapolation**: Queries outside a grid resolve to the nearest edge
//! - **Explicit Edges**: Stencils that would read past a boundary return `None`
//!   instead of silently reading a neighbour

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod differences;
pub mod distributions;
pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::differences::{central_first, central_second};
    pub use crate::distributions::{normal_cdf, normal_pdf};
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{GridLocation, UniformGrid, UniformLinearInterpolator};
}

pub use error::{MathError, MathResult};

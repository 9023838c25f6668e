//! # Parabolic Engine
//!
//! Explicit finite-difference pricing of European options under
//! Black-Scholes.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`GridStepSizer`] turns a [`ParameterSet`](parabolic_core::ParameterSet)
//!    and a spatial resolution into a stable [`GridSpec`]
//! 2. [`ExplicitSolver`] marches the call payoff from maturity back to the
//!    present, producing a [`ValueGrid`]
//! 3. [`ValueInterpolator`] reads price, Delta and Gamma at the spot
//! 4. [`adjust_for_put`] converts call values to put values via parity
//!
//! [`FiniteDifferencePricer`] runs all four steps. The [`analytic`] module
//! holds the closed-form prices the engine converges to.
//!
//! ## Example
//!
//! ```rust
//! use parabolic_core::{OptionType, ParameterSet};
//! use parabolic_engine::prelude::*;
//!
//! let params = ParameterSet::new(OptionType::Put, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
//! let spec = size_grid(&params, 100);
//! let grid = solve(&params, &spec).unwrap();
//! let call = evaluate(&grid, &spec, params.spot()).unwrap();
//! let put = adjust_for_put(call, &params);
//!
//! assert!((put.price - 29.6).abs() < 0.01);
//! assert_eq!(put.gamma, call.gamma);
//! ```
//!
//! ## Features
//!
//! - `parallel`: computes the interior nodes of each time step with rayon

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

pub mod analytic;
pub mod error;
pub mod grid;
pub mod interpolator;
pub mod parity;
pub mod pricer;
pub mod sizing;
pub mod solver;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytic::black_scholes;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::grid::ValueGrid;
    pub use crate::interpolator::{evaluate, ValueInterpolator};
    pub use crate::parity::adjust_for_put;
    pub use crate::pricer::{FiniteDifferencePricer, PricingReport};
    pub use crate::sizing::{size_grid, GridSpec, GridStepSizer};
    pub use crate::solver::{solve, ExplicitSolver, StepEvent};
}

pub use error::{EngineError, EngineResult};
pub use grid::ValueGrid;
pub use interpolator::{evaluate, ValueInterpolator};
pub use parity::adjust_for_put;
pub use pricer::{FiniteDifferencePricer, PricingReport};
pub use sizing::{
    size_grid, GridSpec, GridStepSizer, DEFAULT_MIN_TIME_STEPS, PRICE_CEILING_MULTIPLE,
};
pub use solver::{solve, ExplicitSolver, StepCoefficients, StepEvent};

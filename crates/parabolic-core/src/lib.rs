//! # Parabolic Core
//!
//! Core types and errors for the Parabolic finite-difference option pricer.
//!
//! This crate provides the leaf data shared by every other Parabolic crate:
//!
//! - **Types**: [`OptionType`], the immutable [`ParameterSet`] describing a
//!   European contract, and the [`Valuation`] (price, Delta, Gamma) produced
//!   by the engine
//! - **Errors**: [`CoreError`] for parameters rejected at construction time
//!
//! ## Design Philosophy
//!
//! - **Validate Once**: a `ParameterSet` can only be built from values that
//!   satisfy the model's preconditions, so downstream numerics never re-check
//! - **Immutable Inputs**: parameters are `Copy` and have no setters
//!
//! ## Example
//!
//! ```rust
//! use parabolic_core::prelude::*;
//!
//! let params = ParameterSet::builder()
//!     .option_type(OptionType::Call)
//!     .spot(100.0)
//!     .strike(135.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .build()
//!     .unwrap();
//!
//! assert!(params.is_call());
//! assert_eq!(params.strike(), 135.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{OptionType, ParameterSet, ParameterSetBuilder, Valuation};
}

pub use error::{CoreError, CoreResult};
pub use types::{OptionType, ParameterSet, ParameterSetBuilder, Valuation};

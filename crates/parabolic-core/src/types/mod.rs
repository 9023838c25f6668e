//! Domain types for European option pricing.
//!
//! - [`OptionType`]: Call or put
//! - [`ParameterSet`]: Validated, immutable contract and market inputs
//! - [`Valuation`]: Price and local sensitivities at a spot price

mod option_type;
mod parameters;
mod valuation;

pub use option_type::OptionType;
pub use parameters::{ParameterSet, ParameterSetBuilder};
pub use valuation::Valuation;

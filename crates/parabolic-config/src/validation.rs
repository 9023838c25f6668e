//! Boundary checks on raw contract inputs.
//!
//! The engine assumes a valid [`ParameterSet`]; everything typed in by a
//! user or read from a file goes through here first.

use std::fmt;

use parabolic_core::{OptionType, ParameterSet};

use crate::error::{into_result, ConfigResult, ValidationError};

/// A numeric contract input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    /// Initial underlying price, `S0`.
    Spot,
    /// Strike price, `K`.
    Strike,
    /// Risk-free rate, `r`.
    Rate,
    /// Volatility, `sigma`.
    Volatility,
    /// Maturity in years, `T`.
    Maturity,
}

impl ParameterField {
    /// All fields in prompt order.
    pub const ALL: [ParameterField; 5] = [
        ParameterField::Spot,
        ParameterField::Strike,
        ParameterField::Rate,
        ParameterField::Volatility,
        ParameterField::Maturity,
    ];

    /// Field name used in settings files and error reports.
    pub fn name(self) -> &'static str {
        match self {
            ParameterField::Spot => "spot",
            ParameterField::Strike => "strike",
            ParameterField::Rate => "rate",
            ParameterField::Volatility => "volatility",
            ParameterField::Maturity => "maturity",
        }
    }

    /// Prompt label.
    pub fn label(self) -> &'static str {
        match self {
            ParameterField::Spot => "Initial underlying price (S0)",
            ParameterField::Strike => "Strike price (K)",
            ParameterField::Rate => "Risk-free rate (r)",
            ParameterField::Volatility => "Volatility (sigma)",
            ParameterField::Maturity => "Maturity in years (T)",
        }
    }

    /// What a valid value looks like.
    pub fn requirement(self) -> &'static str {
        match self {
            ParameterField::Spot => "S0 must be strictly positive",
            ParameterField::Strike => "K must be strictly positive",
            ParameterField::Rate => "r must be between 0 and 1, e.g. 5% = 0.05",
            ParameterField::Volatility => "sigma must be strictly positive and at most 1",
            ParameterField::Maturity => "T must be strictly positive",
        }
    }

    /// Checks a single value.
    pub fn check(self, value: f64) -> Result<f64, ValidationError> {
        let outcome = match self {
            ParameterField::Spot => ParameterSet::check_spot(value),
            ParameterField::Strike => ParameterSet::check_strike(value),
            ParameterField::Rate => ParameterSet::check_rate(value),
            ParameterField::Volatility => ParameterSet::check_volatility(value),
            ParameterField::Maturity => ParameterSet::check_maturity(value),
        };

        outcome
            .map(|()| value)
            .map_err(|_| ValidationError::new(self.name(), self.requirement()))
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds a [`ParameterSet`], reporting every invalid field at once.
///
/// # Example
///
/// ```rust
/// use parabolic_config::validate_parameters;
/// use parabolic_core::OptionType;
///
/// let params = validate_parameters(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
/// assert_eq!(params.strike(), 135.0);
///
/// assert!(validate_parameters(OptionType::Call, -1.0, 135.0, 5.0, 0.2, 1.0).is_err());
/// ```
pub fn validate_parameters(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> ConfigResult<ParameterSet> {
    let values = [spot, strike, rate, volatility, maturity];
    let errors = ParameterField::ALL
        .iter()
        .zip(values)
        .filter_map(|(field, value)| field.check(value).err())
        .collect();

    into_result(errors)?;
    Ok(ParameterSet::new(
        option_type,
        spot,
        strike,
        rate,
        volatility,
        maturity,
    )?)
}

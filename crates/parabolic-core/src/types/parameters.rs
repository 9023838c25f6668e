//! Validated option parameters.

use serde::{Deserialize, Serialize};

use super::OptionType;
use crate::error::{CoreError, CoreResult};

/// Immutable economic inputs for pricing a European option.
///
/// Instances can only be created through [`ParameterSet::new`] or
/// [`ParameterSet::builder`], both of which enforce the model's
/// preconditions:
///
/// - `spot`, `strike`, `maturity` strictly positive
/// - `rate` in `[0, 1]`
/// - `volatility` in `(0, 1]`
///
/// # Example
///
/// ```rust
/// use parabolic_core::{OptionType, ParameterSet};
///
/// let params = ParameterSet::new(OptionType::Put, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
/// assert!(params.is_put());
///
/// // 5% must be entered as 0.05
/// assert!(ParameterSet::new(OptionType::Call, 100.0, 135.0, 5.0, 0.2, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct ParameterSet {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct RawParameters {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
}

impl TryFrom<RawParameters> for ParameterSet {
    type Error = CoreError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        ParameterSet::new(
            raw.option_type,
            raw.spot,
            raw.strike,
            raw.rate,
            raw.volatility,
            raw.maturity,
        )
    }
}

impl ParameterSet {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` naming the first parameter
    /// outside its admissible range.
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
    ) -> CoreResult<Self> {
        Self::check_spot(spot)?;
        Self::check_strike(strike)?;
        Self::check_rate(rate)?;
        Self::check_volatility(volatility)?;
        Self::check_maturity(maturity)?;

        Ok(Self {
            option_type,
            spot,
            strike,
            rate,
            volatility,
            maturity,
        })
    }

    /// Returns a builder for incremental construction.
    #[must_use]
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    /// Checks the initial underlying price.
    pub fn check_spot(spot: f64) -> CoreResult<()> {
        if spot.is_finite() && spot > 0.0 {
            Ok(())
        } else {
            Err(CoreError::invalid_parameter(
                "spot",
                spot,
                "must be strictly positive",
            ))
        }
    }

    /// Checks the strike price.
    pub fn check_strike(strike: f64) -> CoreResult<()> {
        if strike.is_finite() && strike > 0.0 {
            Ok(())
        } else {
            Err(CoreError::invalid_parameter(
                "strike",
                strike,
                "must be strictly positive",
            ))
        }
    }

    /// Checks the risk-free rate.
    pub fn check_rate(rate: f64) -> CoreResult<()> {
        if (0.0..=1.0).contains(&rate) {
            Ok(())
        } else {
            Err(CoreError::invalid_parameter(
                "rate",
                rate,
                "must be between 0 and 1 (e.g. 5% = 0.05)",
            ))
        }
    }

    /// Checks the volatility.
    pub fn check_volatility(volatility: f64) -> CoreResult<()> {
        if volatility > 0.0 && volatility <= 1.0 {
            Ok(())
        } else {
            Err(CoreError::invalid_parameter(
                "volatility",
                volatility,
                "must be strictly positive and at most 1",
            ))
        }
    }

    /// Checks the time to maturity in years.
    pub fn check_maturity(maturity: f64) -> CoreResult<()> {
        if maturity.is_finite() && maturity > 0.0 {
            Ok(())
        } else {
            Err(CoreError::invalid_parameter(
                "maturity",
                maturity,
                "must be strictly positive",
            ))
        }
    }

    /// Returns the option type.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns true if the contract is a call.
    pub fn is_call(&self) -> bool {
        self.option_type.is_call()
    }

    /// Returns true if the contract is a put.
    pub fn is_put(&self) -> bool {
        self.option_type.is_put()
    }

    /// Initial underlying price.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Continuously compounded risk-free rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualized volatility of the underlying.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Discount factor to maturity, `exp(-r T)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns a copy with a different option type.
    ///
    /// The economic inputs are unchanged, so the copy is valid by construction.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Returns a validated copy priced at a different spot.
    pub fn with_spot(&self, spot: f64) -> CoreResult<Self> {
        Self::check_spot(spot)?;
        Ok(Self { spot, ..*self })
    }
}

/// Builder for [`ParameterSet`].
///
/// Every field is required apart from the option type, which defaults to a
/// call.
#[derive(Debug, Clone, Default)]
pub struct ParameterSetBuilder {
    option_type: OptionType,
    spot: Option<f64>,
    strike: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
}

impl ParameterSetBuilder {
    /// Sets the option type.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Sets the initial underlying price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the volatility.
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time to maturity in years.
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Validates and builds the parameter set.
    pub fn build(self) -> CoreResult<ParameterSet> {
        ParameterSet::new(
            self.option_type,
            self.spot.ok_or(CoreError::missing_parameter("spot"))?,
            self.strike.ok_or(CoreError::missing_parameter("strike"))?,
            self.rate.ok_or(CoreError::missing_parameter("rate"))?,
            self.volatility
                .ok_or(CoreError::missing_parameter("volatility"))?,
            self.maturity.ok_or(CoreError::missing_parameter("maturity"))?,
        )
    }
}

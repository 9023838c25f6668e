//! Settings file.
//!
//! ```toml
//! [resolution]
//! precise_steps = 2000
//! fast_steps = 100
//!
//! [engine]
//! min_time_steps = 100
//!
//! [defaults]
//! option_type = "call"
//! spot = 100.0
//! strike = 135.0
//! rate = 0.05
//! volatility = 0.2
//! maturity = 1.0
//!
//! [output]
//! precision = 6
//! ```
//!
//! Every table and field is optional and falls back to the values above.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use parabolic_core::{OptionType, ParameterSet};
use parabolic_engine::{FiniteDifferencePricer, GridStepSizer, DEFAULT_MIN_TIME_STEPS};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::resolution::{Resolution, ResolutionPolicy};
use crate::validation::{validate_parameters, ParameterField};

// =============================================================================
// ENGINE
// =============================================================================

/// Engine tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Minimum number of time layers, capping `dt` at `T / min_time_steps`.
    #[serde(default = "default_min_time_steps")]
    pub min_time_steps: u32,
}

fn default_min_time_steps() -> u32 {
    DEFAULT_MIN_TIME_STEPS
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_time_steps: DEFAULT_MIN_TIME_STEPS,
        }
    }
}

impl EngineSettings {
    /// Grid sizer configured with these settings.
    pub fn sizer(&self) -> GridStepSizer {
        GridStepSizer::new().with_min_time_steps(self.min_time_steps)
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.min_time_steps == 0 {
            errors.push(ValidationError::with_rule(
                "engine.min_time_steps",
                "Minimum time steps must be at least 1",
                "positive_steps",
            ));
        }

        errors
    }
}

// =============================================================================
// CONTRACT DEFAULTS
// =============================================================================

/// Contract used when an input is not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionDefaults {
    /// Call or put.
    #[serde(default)]
    pub option_type: OptionType,

    /// Initial underlying price.
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Strike price.
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Risk-free rate as a decimal.
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Volatility as a decimal.
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Maturity in years.
    #[serde(default = "default_maturity")]
    pub maturity: f64,
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    135.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_maturity() -> f64 {
    1.0
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            option_type: OptionType::Call,
            spot: default_spot(),
            strike: default_strike(),
            rate: default_rate(),
            volatility: default_volatility(),
            maturity: default_maturity(),
        }
    }
}

impl OptionDefaults {
    /// Default value of a numeric field.
    pub fn value(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::Spot => self.spot,
            ParameterField::Strike => self.strike,
            ParameterField::Rate => self.rate,
            ParameterField::Volatility => self.volatility,
            ParameterField::Maturity => self.maturity,
        }
    }

    /// The default contract as a validated parameter set.
    pub fn to_parameters(&self) -> ConfigResult<ParameterSet> {
        validate_parameters(
            self.option_type,
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }
}

impl Validate for OptionDefaults {
    fn validate(&self) -> Vec<ValidationError> {
        ParameterField::ALL
            .iter()
            .filter_map(|&field| field.check(self.value(field)).err())
            .map(|err| ValidationError::new(format!("defaults.{}", err.field), err.message))
            .collect()
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Decimal places for prices and Greeks.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    6
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.precision > 15 {
            errors.push(ValidationError::with_rule(
                "output.precision",
                "Precision cannot exceed 15",
                "max_precision",
            ));
        }

        errors
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

/// All settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Step counts for the named modes.
    #[serde(default)]
    pub resolution: ResolutionPolicy,

    /// Engine tuning.
    #[serde(default)]
    pub engine: EngineSettings,

    /// Default contract.
    #[serde(default)]
    pub defaults: OptionDefaults,

    /// Presentation.
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate_or_error()?;
        Ok(settings)
    }

    /// Reads, parses and validates a settings file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        debug!(path = %path.display(), "Loaded settings file");
        Self::from_toml_str(&content)
    }

    /// Serializes the settings as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the settings to `path`, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.to_toml_string()?).map_err(io_error)
    }

    /// Spatial step count for `resolution`.
    pub fn spatial_steps(&self, resolution: Resolution) -> ConfigResult<usize> {
        self.resolution.resolve(resolution)
    }

    /// Pricer for `resolution` using the engine settings.
    pub fn pricer(&self, resolution: Resolution) -> ConfigResult<FiniteDifferencePricer> {
        let steps = self.spatial_steps(resolution)?;
        Ok(FiniteDifferencePricer::new(steps)?.with_sizer(self.engine.sizer()))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .resolution
            .validate()
            .into_iter()
            .map(|err| ValidationError {
                field: format!("resolution.{}", err.field),
                ..err
            })
            .collect();

        errors.extend(self.engine.validate());
        errors.extend(self.defaults.validate());
        errors.extend(self.output.validate());
        errors
    }
}

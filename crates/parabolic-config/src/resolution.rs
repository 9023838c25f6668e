//! Precision modes and the spatial resolution they select.
//!
//! | Mode | Code | Spatial steps |
//! |------|------|---------------|
//! | Precise | 1 | 2000 |
//! | Fast | 2 | 100 |
//! | Custom | 3 | user supplied |
//!
//! An unrecognised code falls back to `Fast`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Spatial steps used by [`Mode::Precise`] unless overridden.
pub const PRECISE_STEPS: usize = 2000;

/// Spatial steps used by [`Mode::Fast`] unless overridden.
pub const FAST_STEPS: usize = 100;

// =============================================================================
// MODE
// =============================================================================

/// User-facing precision mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Small steps, slow.
    Precise,
    /// Large steps, less accurate.
    #[default]
    Fast,
    /// User-chosen number of spatial steps.
    Custom,
}

impl Mode {
    /// All modes in menu order.
    pub const ALL: [Mode; 3] = [Mode::Precise, Mode::Fast, Mode::Custom];

    /// Menu code of the mode.
    pub fn code(self) -> u8 {
        match self {
            Mode::Precise => 1,
            Mode::Fast => 2,
            Mode::Custom => 3,
        }
    }

    /// Mode for a menu code, or `None` if the code is not on the menu.
    pub fn try_from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Mode::Precise),
            2 => Some(Mode::Fast),
            3 => Some(Mode::Custom),
            _ => None,
        }
    }

    /// Mode for a menu code, falling back to `Fast` for unknown codes.
    pub fn from_code(code: i64) -> Self {
        Self::try_from_code(code).unwrap_or_else(|| {
            warn!(code, "Invalid mode, using fast mode");
            Mode::Fast
        })
    }

    /// One-line menu description.
    pub fn description(self) -> &'static str {
        match self {
            Mode::Precise => "Precise (small steps, slow)",
            Mode::Fast => "Fast (large steps, less accurate)",
            Mode::Custom => "Custom (choose the number of spatial steps)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Precise => "precise",
            Mode::Fast => "fast",
            Mode::Custom => "custom",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "precise" | "p" | "1" => Ok(Mode::Precise),
            "fast" | "f" | "2" => Ok(Mode::Fast),
            "custom" | "c" | "3" => Ok(Mode::Custom),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// A mode together with the step count a custom mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Precise mode.
    Precise,
    /// Fast mode.
    #[default]
    Fast,
    /// Explicit number of spatial steps.
    Custom(usize),
}

impl Resolution {
    /// Pairs a mode with the custom step count, if any.
    ///
    /// The step count is ignored for `Precise` and `Fast`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `mode` is `Custom` and no step count is
    /// given.
    pub fn from_mode(mode: Mode, custom_steps: Option<usize>) -> ConfigResult<Self> {
        match (mode, custom_steps) {
            (Mode::Precise, _) => Ok(Resolution::Precise),
            (Mode::Fast, _) => Ok(Resolution::Fast),
            (Mode::Custom, Some(n)) => Ok(Resolution::Custom(n)),
            (Mode::Custom, None) => Err(ConfigError::validation(
                "steps",
                "custom mode requires a number of spatial steps",
            )),
        }
    }

    /// The mode this resolution belongs to.
    pub fn mode(self) -> Mode {
        match self {
            Resolution::Precise => Mode::Precise,
            Resolution::Fast => Mode::Fast,
            Resolution::Custom(_) => Mode::Custom,
        }
    }
}

// =============================================================================
// POLICY
// =============================================================================

/// Step counts behind the named modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPolicy {
    /// Spatial steps for precise mode.
    #[serde(default = "default_precise_steps")]
    pub precise_steps: usize,

    /// Spatial steps for fast mode.
    #[serde(default = "default_fast_steps")]
    pub fast_steps: usize,
}

fn default_precise_steps() -> usize {
    PRECISE_STEPS
}

fn default_fast_steps() -> usize {
    FAST_STEPS
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            precise_steps: PRECISE_STEPS,
            fast_steps: FAST_STEPS,
        }
    }
}

impl ResolutionPolicy {
    /// Spatial step count for `resolution`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the resulting count is zero.
    pub fn resolve(&self, resolution: Resolution) -> ConfigResult<usize> {
        let steps = match resolution {
            Resolution::Precise => self.precise_steps,
            Resolution::Fast => self.fast_steps,
            Resolution::Custom(n) => n,
        };

        if steps == 0 {
            return Err(ConfigError::validation(
                "steps",
                format!("{} mode needs at least 1 spatial step", resolution.mode()),
            ));
        }
        Ok(steps)
    }
}

impl Validate for ResolutionPolicy {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.precise_steps == 0 {
            errors.push(ValidationError::with_rule(
                "precise_steps",
                "Precise steps must be at least 1",
                "positive_steps",
            ));
        }

        if self.fast_steps == 0 {
            errors.push(ValidationError::with_rule(
                "fast_steps",
                "Fast steps must be at least 1",
                "positive_steps",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes() {
        assert_eq!(Mode::from_code(1), Mode::Precise);
        assert_eq!(Mode::from_code(2), Mode::Fast);
        assert_eq!(Mode::from_code(3), Mode::Custom);
        for mode in Mode::ALL {
            assert_eq!(Mode::from_code(i64::from(mode.code())), mode);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_fast() {
        assert_eq!(Mode::from_code(0), Mode::Fast);
        assert_eq!(Mode::from_code(7), Mode::Fast);
        assert_eq!(Mode::from_code(-1), Mode::Fast);
        assert_eq!(Mode::try_from_code(7), None);
        assert_eq!(Mode::try_from_code(2), Some(Mode::Fast));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("precise".parse::<Mode>().unwrap(), Mode::Precise);
        assert_eq!("FAST".parse::<Mode>().unwrap(), Mode::Fast);
        assert_eq!(" 3 ".parse::<Mode>().unwrap(), Mode::Custom);
        assert!(matches!(
            "slow".parse::<Mode>(),
            Err(ConfigError::UnknownMode(ref s)) if s == "slow"
        ));
    }

    #[test]
    fn test_resolution_from_mode() {
        assert_eq!(
            Resolution::from_mode(Mode::Precise, Some(7)).unwrap(),
            Resolution::Precise
        );
        assert_eq!(
            Resolution::from_mode(Mode::Custom, Some(250)).unwrap(),
            Resolution::Custom(250)
        );
        assert!(Resolution::from_mode(Mode::Custom, None).is_err());
    }

    #[test]
    fn test_policy_resolve() {
        let policy = ResolutionPolicy::default();

        assert_eq!(policy.resolve(Resolution::Precise).unwrap(), 2000);
        assert_eq!(policy.resolve(Resolution::Fast).unwrap(), 100);
        assert_eq!(policy.resolve(Resolution::Custom(321)).unwrap(), 321);
        assert!(matches!(
            policy.resolve(Resolution::Custom(0)),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_policy_validation() {
        assert!(ResolutionPolicy::default().is_valid());

        let broken = ResolutionPolicy {
            precise_steps: 0,
            fast_steps: 0,
        };
        assert_eq!(broken.validate().len(), 2);
        assert!(broken.resolve(Resolution::Fast).is_err());
    }
}

//! Option type (call/put).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The right conveyed by a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    #[default]
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Returns true for a call.
    #[must_use]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for a put.
    #[must_use]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Maps the console code used by the interactive prompt (`1` call, `0` put).
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(OptionType::Call),
            0 => Some(OptionType::Put),
            _ => None,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        };
        write!(f, "{name}")
    }
}

impl FromStr for OptionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" | "1" => Ok(OptionType::Call),
            "put" | "p" | "0" => Ok(OptionType::Put),
            _ => Err(CoreError::InvalidOptionType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("1".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" 0 ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(OptionType::from_code(1), Some(OptionType::Call));
        assert_eq!(OptionType::from_code(0), Some(OptionType::Put));
        assert_eq!(OptionType::from_code(2), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OptionType::Put).unwrap();
        assert_eq!(json, "\"put\"");
        let back: OptionType = serde_json::from_str("\"call\"").unwrap();
        assert!(back.is_call());
    }
}

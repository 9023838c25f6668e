//! CLI command implementations.

pub mod config;
pub mod convergence;
pub mod interactive;
pub mod price;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use convergence::ConvergenceArgs;
pub use interactive::InteractiveArgs;
pub use price::PriceArgs;

use std::path::PathBuf;

use parabolic_config::{ConfigError, Settings};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Default settings file location.
pub fn default_settings_path() -> CliResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(base.join("parabolic").join("config.toml"))
}

/// Loads settings from `explicit`, or from the default location if a file
/// exists there, or falls back to built-in defaults.
///
/// An explicitly named file must exist.
pub fn load_settings(explicit: Option<&PathBuf>) -> CliResult<Settings> {
    if let Some(path) = explicit {
        return Ok(Settings::from_file(path)?);
    }

    let Ok(path) = default_settings_path() else {
        return Ok(Settings::default());
    };
    match Settings::from_file(&path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::NotFound { .. }) => {
            debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Settings::default())
        }
        Err(err) => Err(err.into()),
    }
}

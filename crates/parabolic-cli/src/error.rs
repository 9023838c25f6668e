//! CLI error types.

use parabolic_config::ConfigError;
use parabolic_engine::EngineError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Standard input ended before a prompt was answered.
    #[error("Input closed before all parameters were entered")]
    InputClosed,

    /// A settings file already exists and would be overwritten.
    #[error("Settings file already exists: {0}. Use --force to overwrite.")]
    AlreadyExists(String),

    /// No configuration directory could be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Configuration or validation error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pricing error.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

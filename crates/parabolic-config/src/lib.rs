//! # Parabolic Configuration
//!
//! Everything that sits between user input and the pricing engine:
//!
//! - **Resolution**: precision modes (precise, fast, custom) and the spatial
//!   step counts behind them
//! - **Validation**: field-by-field checks on raw contract inputs
//! - **Settings**: TOML settings file with engine tuning, default contract
//!   and output precision
//!
//! # Example
//!
//! ```rust
//! use parabolic_config::{Mode, Resolution, Settings};
//!
//! let settings = Settings::from_toml_str("[resolution]\nfast_steps = 120").unwrap();
//! let resolution = Resolution::from_mode(Mode::from_code(2), None).unwrap();
//!
//! assert_eq!(settings.spatial_steps(resolution).unwrap(), 120);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod resolution;
pub mod settings;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
    pub use crate::resolution::{Mode, Resolution, ResolutionPolicy};
    pub use crate::settings::{EngineSettings, OptionDefaults, OutputSettings, Settings};
    pub use crate::validation::{validate_parameters, ParameterField};
}

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use resolution::{Mode, Resolution, ResolutionPolicy, FAST_STEPS, PRECISE_STEPS};
pub use settings::{EngineSettings, OptionDefaults, OutputSettings, Settings};
pub use validation::{validate_parameters, ParameterField};

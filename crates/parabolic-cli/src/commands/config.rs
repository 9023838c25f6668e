//! Config command implementation.
//!
//! Shows the effective settings and manages the settings file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use parabolic_config::Settings;

use crate::cli::OutputFormat;
use crate::commands::default_settings_path;
use crate::error::CliError;
use crate::output::{
    print_csv, print_header, print_info, print_json, print_success, print_table, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective settings
    Show,

    /// Show the settings file location
    Path,

    /// Write a settings file with the built-in defaults
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    format: OutputFormat,
    settings: &Settings,
    explicit_path: Option<PathBuf>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(settings, format),
        ConfigCommand::Path => execute_path(explicit_path),
        ConfigCommand::Init(init) => execute_init(init, explicit_path),
    }
}

/// Settings flattened to dotted keys.
fn entries(settings: &Settings) -> Vec<KeyValue> {
    let d = &settings.defaults;
    vec![
        KeyValue::new(
            "resolution.precise_steps",
            settings.resolution.precise_steps.to_string(),
        ),
        KeyValue::new(
            "resolution.fast_steps",
            settings.resolution.fast_steps.to_string(),
        ),
        KeyValue::new(
            "engine.min_time_steps",
            settings.engine.min_time_steps.to_string(),
        ),
        KeyValue::new("defaults.option_type", d.option_type.to_string().to_lowercase()),
        KeyValue::new("defaults.spot", d.spot.to_string()),
        KeyValue::new("defaults.strike", d.strike.to_string()),
        KeyValue::new("defaults.rate", d.rate.to_string()),
        KeyValue::new("defaults.volatility", d.volatility.to_string()),
        KeyValue::new("defaults.maturity", d.maturity.to_string()),
        KeyValue::new("output.precision", settings.output.precision.to_string()),
    ]
}

/// Show current configuration.
fn execute_show(settings: &Settings, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_table(&entries(settings));
        }
        OutputFormat::Json => print_json(settings)?,
        OutputFormat::Csv => print_csv(&entries(settings))?,
        OutputFormat::Minimal => print!("{}", settings.to_toml_string()?),
    }
    Ok(())
}

fn resolve_path(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => Ok(path),
        None => Ok(default_settings_path()?),
    }
}

/// Show configuration file path.
fn execute_path(explicit_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_path(explicit_path)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write the default settings file.
fn execute_init(args: InitArgs, explicit_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_path(explicit_path)?;
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path.display().to_string()).into());
    }

    Settings::default().write_to(&path)?;
    print_success(&format!("Wrote default settings to {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_settings() {
        let entries = entries(&Settings::default());
        assert_eq!(entries.len(), 10);
        assert!(entries
            .iter()
            .any(|e| e.key == "defaults.option_type" && e.value == "call"));
        assert!(entries
            .iter()
            .any(|e| e.key == "resolution.precise_steps" && e.value == "2000"));
    }
}

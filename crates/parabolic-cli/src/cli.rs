//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use parabolic_config::{ConfigResult, Mode, OptionDefaults, Resolution};
use parabolic_core::{OptionType, ParameterSet};

use crate::commands::{ConfigArgs, ConvergenceArgs, InteractiveArgs, PriceArgs};

/// Parabolic - explicit finite-difference pricing of European options
#[derive(Parser)]
#[command(name = "parabolic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "PARABOLIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price an option from command-line arguments
    Price(PriceArgs),

    /// Enter option parameters and precision mode at prompts
    Interactive(InteractiveArgs),

    /// Price one contract at several resolutions against the closed form
    Convergence(ConvergenceArgs),

    /// Inspect or create the settings file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Option type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionKind {
    /// Right to buy
    Call,
    /// Right to sell
    Put,
}

impl From<OptionKind> for OptionType {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Call => OptionType::Call,
            OptionKind::Put => OptionType::Put,
        }
    }
}

/// Precision mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// 2000 spatial steps
    Precise,
    /// 100 spatial steps
    Fast,
    /// Spatial steps given by --steps
    Custom,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Precise => Mode::Precise,
            ModeArg::Fast => Mode::Fast,
            ModeArg::Custom => Mode::Custom,
        }
    }
}

/// Contract inputs shared by the pricing commands.
///
/// Missing values come from the `[defaults]` table of the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Option type
    #[arg(long = "type", value_enum)]
    pub option_type: Option<OptionKind>,

    /// Initial underlying price (S0)
    #[arg(long, allow_negative_numbers = true)]
    pub spot: Option<f64>,

    /// Strike price (K)
    #[arg(long, allow_negative_numbers = true)]
    pub strike: Option<f64>,

    /// Risk-free rate as a decimal (5% = 0.05)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Volatility as a decimal (20% = 0.2)
    #[arg(long, visible_alias = "vol", allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Maturity in years (T)
    #[arg(long, allow_negative_numbers = true)]
    pub maturity: Option<f64>,
}

impl ContractArgs {
    /// Validated contract, filling gaps from `defaults`.
    pub fn resolve(&self, defaults: &OptionDefaults) -> ConfigResult<ParameterSet> {
        parabolic_config::validate_parameters(
            self.option_type
                .map_or(defaults.option_type, OptionType::from),
            self.spot.unwrap_or(defaults.spot),
            self.strike.unwrap_or(defaults.strike),
            self.rate.unwrap_or(defaults.rate),
            self.volatility.unwrap_or(defaults.volatility),
            self.maturity.unwrap_or(defaults.maturity),
        )
    }
}

/// Precision inputs shared by the pricing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolutionArgs {
    /// Precision mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of spatial steps (implies custom mode)
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,
}

impl ResolutionArgs {
    /// Resolution selected by the flags; fast when nothing is given.
    pub fn resolve(&self) -> ConfigResult<Resolution> {
        let mode = match (self.mode, self.steps) {
            (Some(mode), _) => Mode::from(mode),
            (None, Some(_)) => Mode::Custom,
            (None, None) => Mode::Fast,
        };
        Resolution::from_mode(mode, self.steps)
    }
}

//! Parabolic CLI - explicit finite-difference option pricing.
//!
//! # Usage
//!
//! ```bash
//! # Price the default contract in fast mode
//! parabolic price
//!
//! # Price a put precisely and compare with Black-Scholes
//! parabolic price --type put --spot 100 --strike 135 --rate 0.05 \
//!     --volatility 0.2 --maturity 1 --mode precise --compare
//!
//! # Enter everything at prompts
//! parabolic interactive
//!
//! # Watch the grid converge
//! parabolic convergence --steps 100,400,2000 --format csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod prompt;

use cli::{Cli, Commands};
use commands::config::ConfigCommand;
use parabolic_config::Settings;

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let format = cli.format;
    let quiet = cli.quiet;

    // `config init` and `config path` must work even when the file is broken
    let tolerate_bad_settings = matches!(
        &cli.command,
        Commands::Config(args) if !matches!(args.command, ConfigCommand::Show)
    );
    let settings = match commands::load_settings(cli.config.as_ref()) {
        Ok(settings) => settings,
        Err(err) if tolerate_bad_settings => {
            output::print_warning(&format!("Ignoring settings file: {err}"));
            Settings::default()
        }
        Err(err) => return Err(err.into()),
    };

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format, &settings, quiet)?,
        Commands::Interactive(args) => {
            commands::interactive::execute(args, format, &settings, quiet)?;
        }
        Commands::Convergence(args) => {
            commands::convergence::execute(args, format, &settings, quiet)?;
        }
        Commands::Config(args) => commands::config::execute(args, format, &settings, cli.config)?,
    }

    Ok(())
}

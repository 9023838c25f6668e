//! Interactive command implementation.
//!
//! Asks for the contract and the precision mode at the terminal, shows the
//! grid the mode produces, then prices.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use parabolic_config::{Mode, Resolution, Settings};

use crate::cli::OutputFormat;
use crate::commands::price::{print_price, PriceOutput};
use crate::error::CliResult;
use crate::prompt::Prompter;

/// Arguments for the interactive command.
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Also show the closed-form Black-Scholes values
    #[arg(long)]
    pub compare: bool,
}

/// Runs the prompt flow and prices the contract.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    settings: &Settings,
    compare: bool,
) -> CliResult<PriceOutput> {
    let params = prompter.ask_parameters(&settings.defaults)?;

    let mode = prompter.ask_mode()?;
    let resolution = match mode {
        Mode::Custom => Resolution::Custom(prompter.ask_steps()?),
        other => Resolution::from_mode(other, None)?,
    };

    let pricer = settings.pricer(resolution)?;
    let grid = pricer.grid_for(&params);
    writeln!(
        prompter.output(),
        "Computed time step (dt): {}, number of time steps (M): {}",
        grid.temporal_step_size(),
        grid.temporal_steps()
    )?;

    let report = pricer.price(&params)?;
    Ok(PriceOutput::new(params, resolution, &report, compare))
}

/// Execute the interactive command.
pub fn execute(
    args: InteractiveArgs,
    format: OutputFormat,
    settings: &Settings,
    quiet: bool,
) -> Result<()> {
    // Machine-readable formats keep stdout for the result alone.
    let output = match format {
        OutputFormat::Table => prompt_on(io::stdout().lock(), settings, args.compare)?,
        _ => prompt_on(io::stderr().lock(), settings, args.compare)?,
    };

    print_price(&output, format, settings.output.precision, quiet)
}

fn prompt_on<W: Write>(writer: W, settings: &Settings, compare: bool) -> CliResult<PriceOutput> {
    let mut prompter = Prompter::new(io::stdin().lock(), writer);
    run_session(&mut prompter, settings, compare)
}

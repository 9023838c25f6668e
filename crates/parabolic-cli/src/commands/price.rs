//! Price command implementation.
//!
//! Prices a single European option on the finite-difference grid.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use parabolic_config::{Resolution, Settings};
use parabolic_core::{OptionType, ParameterSet, Valuation};
use parabolic_engine::analytic::black_scholes;
use parabolic_engine::{GridSpec, PricingReport};

use crate::cli::{ContractArgs, OutputFormat, ResolutionArgs};
use crate::output::{format_number, print_csv, print_header, print_json, print_table, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub resolution: ResolutionArgs,

    /// Also show the closed-form Black-Scholes values
    #[arg(long)]
    pub compare: bool,
}

/// Pricing result in machine-readable form.
#[derive(Debug, Serialize)]
pub struct PriceOutput {
    pub parameters: ParameterSet,
    pub resolution: Resolution,
    pub grid: GridSpec,
    pub valuation: Valuation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<Valuation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_error: Option<f64>,
}

impl PriceOutput {
    /// Collects a report and, optionally, the closed-form reference.
    pub fn new(
        params: ParameterSet,
        resolution: Resolution,
        report: &PricingReport,
        compare: bool,
    ) -> Self {
        let reference = compare.then(|| black_scholes(&params));
        Self {
            parameters: params,
            resolution,
            grid: report.grid,
            valuation: report.valuation,
            black_scholes: reference,
            price_error: reference.map(|bs| report.valuation.price - bs.price),
        }
    }

    /// Rows for the table view.
    pub fn rows(&self, precision: usize) -> Vec<KeyValue> {
        let p = &self.parameters;
        let g = &self.grid;
        let v = &self.valuation;

        let mut rows = vec![
            KeyValue::new("Option Type", p.option_type().to_string()),
            KeyValue::from_number("Spot (S0)", p.spot(), 4),
            KeyValue::from_number("Strike (K)", p.strike(), 4),
            KeyValue::from_percent("Rate (r)", p.rate()),
            KeyValue::from_percent("Volatility (sigma)", p.volatility()),
            KeyValue::from_number("Maturity (T)", p.maturity(), 4),
            KeyValue::separator(),
            KeyValue::new("Mode", self.resolution.mode().to_string()),
            KeyValue::new("Spatial Steps (N)", g.spatial_steps().to_string()),
            KeyValue::new("Time Steps (M)", g.temporal_steps().to_string()),
            KeyValue::new("Time Step (dt)", format!("{:.6e}", g.temporal_step_size())),
            KeyValue::from_number("Price Ceiling (S_max)", g.price_ceiling(), 4),
            KeyValue::separator(),
            KeyValue::from_number("Price", v.price, precision),
            KeyValue::from_number("Delta", v.delta, precision),
            KeyValue::from_number("Gamma", v.gamma, precision),
        ];

        if let (Some(bs), Some(err)) = (self.black_scholes, self.price_error) {
            rows.push(KeyValue::separator());
            rows.push(KeyValue::from_number("Black-Scholes Price", bs.price, precision));
            rows.push(KeyValue::from_number("Black-Scholes Delta", bs.delta, precision));
            rows.push(KeyValue::from_number("Black-Scholes Gamma", bs.gamma, precision));
            rows.push(KeyValue::new("Price Error", format!("{err:+.prec$}", prec = precision)));
        }

        rows
    }

    /// Flat record for CSV output.
    pub fn record(&self) -> PriceRecord {
        let p = &self.parameters;
        PriceRecord {
            option_type: p.option_type(),
            spot: p.spot(),
            strike: p.strike(),
            rate: p.rate(),
            volatility: p.volatility(),
            maturity: p.maturity(),
            spatial_steps: self.grid.spatial_steps(),
            time_steps: self.grid.temporal_steps(),
            dt: self.grid.temporal_step_size(),
            price: self.valuation.price,
            delta: self.valuation.delta,
            gamma: self.valuation.gamma,
            bs_price: self.black_scholes.map(|bs| bs.price),
        }
    }
}

/// One CSV line.
#[derive(Debug, Serialize)]
pub struct PriceRecord {
    pub option_type: OptionType,
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub spatial_steps: usize,
    pub time_steps: usize,
    pub dt: f64,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub bs_price: Option<f64>,
}

/// Writes a pricing result in the requested format.
pub fn print_price(
    output: &PriceOutput,
    format: OutputFormat,
    precision: usize,
    quiet: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Option Pricing Results");
            }
            print_table(&output.rows(precision));
        }
        OutputFormat::Json => print_json(output)?,
        OutputFormat::Csv => print_csv(&[output.record()])?,
        OutputFormat::Minimal => {
            println!("{}", format_number(output.valuation.price, precision));
        }
    }
    Ok(())
}

/// Execute the price command.
pub fn execute(
    args: PriceArgs,
    format: OutputFormat,
    settings: &Settings,
    quiet: bool,
) -> Result<()> {
    let params = args.contract.resolve(&settings.defaults)?;
    let resolution = args.resolution.resolve()?;
    let report = settings.pricer(resolution)?.price(&params)?;

    let output = PriceOutput::new(params, resolution, &report, args.compare);
    print_price(&output, format, settings.output.precision, quiet)
}

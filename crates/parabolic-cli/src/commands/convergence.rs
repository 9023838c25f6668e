//! Convergence command implementation.
//!
//! Prices one contract at increasing spatial resolutions and compares each
//! result with the closed-form Black-Scholes value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use parabolic_config::Settings;
use parabolic_core::{ParameterSet, Valuation};
use parabolic_engine::analytic::black_scholes;
use parabolic_engine::FiniteDifferencePricer;
use tracing::info;

use crate::cli::{ContractArgs, OutputFormat};
use crate::output::{format_number, print_csv, print_header, print_info, print_json, print_table};

/// Arguments for the convergence command.
#[derive(Args, Debug)]
pub struct ConvergenceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Spatial step counts to price at
    #[arg(
        short = 'n',
        long,
        value_delimiter = ',',
        default_values_t = vec![50, 100, 200, 400, 1000, 2000]
    )]
    pub steps: Vec<usize>,
}

/// One resolution of the study.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConvergencePoint {
    pub spatial_steps: usize,
    pub time_steps: usize,
    pub dt: f64,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub error: f64,
}

#[derive(Tabled)]
struct ConvergenceRow {
    #[tabled(rename = "N")]
    spatial_steps: String,
    #[tabled(rename = "M")]
    time_steps: String,
    #[tabled(rename = "dt")]
    dt: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Delta")]
    delta: String,
    #[tabled(rename = "Gamma")]
    gamma: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl ConvergenceRow {
    fn new(point: &ConvergencePoint, precision: usize) -> Self {
        Self {
            spatial_steps: point.spatial_steps.to_string(),
            time_steps: point.time_steps.to_string(),
            dt: format!("{:.3e}", point.dt),
            price: format_number(point.price, precision),
            delta: format_number(point.delta, precision),
            gamma: format_number(point.gamma, precision),
            error: format!("{:+.prec$}", point.error, prec = precision),
        }
    }
}

#[derive(Serialize)]
struct ConvergenceOutput<'a> {
    parameters: ParameterSet,
    black_scholes: Valuation,
    points: &'a [ConvergencePoint],
}

/// Prices `params` at each resolution, in the order given.
pub fn study(
    params: &ParameterSet,
    steps: &[usize],
    settings: &Settings,
) -> Result<Vec<ConvergencePoint>> {
    let reference = black_scholes(params).price;
    let sizer = settings.engine.sizer();

    steps
        .iter()
        .map(|&n| -> Result<ConvergencePoint> {
            let report = FiniteDifferencePricer::new(n)?
                .with_sizer(sizer)
                .price(params)?;
            let v = report.valuation;
            info!(spatial_steps = n, price = v.price, "Convergence point");

            Ok(ConvergencePoint {
                spatial_steps: n,
                time_steps: report.time_steps(),
                dt: report.dt(),
                price: v.price,
                delta: v.delta,
                gamma: v.gamma,
                error: v.price - reference,
            })
        })
        .collect()
}

/// Execute the convergence command.
pub fn execute(
    args: ConvergenceArgs,
    format: OutputFormat,
    settings: &Settings,
    quiet: bool,
) -> Result<()> {
    let params = args.contract.resolve(&settings.defaults)?;
    let points = study(&params, &args.steps, settings)?;
    let reference = black_scholes(&params);
    let precision = settings.output.precision;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Convergence to Black-Scholes");
                print_info(&format!(
                    "Closed-form {} price: {}",
                    params.option_type(),
                    format_number(reference.price, precision)
                ));
            }
            let rows: Vec<_> = points
                .iter()
                .map(|p| ConvergenceRow::new(p, precision))
                .collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&ConvergenceOutput {
            parameters: params,
            black_scholes: reference,
            points: &points,
        })?,
        OutputFormat::Csv => print_csv(&points)?,
        OutputFormat::Minimal => {
            if let Some(last) = points.last() {
                println!("{}", format_number(last.error, precision));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parabolic_core::OptionType;

    #[test]
    fn test_error_shrinks_with_resolution() {
        let params = ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
        let points = study(&params, &[100, 200, 400], &Settings::default()).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].time_steps, 401);
        assert!(points[0].error.abs() > points[1].error.abs());
        assert!(points[1].error.abs() > points[2].error.abs());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let params = ParameterSet::new(OptionType::Put, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert!(study(&params, &[100, 0], &Settings::default()).is_err());
    }
}

//! End-to-end pricing scenarios.

use approx::assert_relative_eq;
use parabolic_core::{OptionType, ParameterSet};
use parabolic_engine::analytic::black_scholes;
use parabolic_engine::prelude::*;

fn contract(option_type: OptionType, spot: f64) -> ParameterSet {
    ParameterSet::new(option_type, spot, 135.0, 0.05, 0.2, 1.0).unwrap()
}

fn price(params: &ParameterSet, spatial_steps: usize) -> PricingReport {
    FiniteDifferencePricer::new(spatial_steps)
        .unwrap()
        .price(params)
        .unwrap()
}

// =============================================================================
// REFERENCE CONTRACT
// =============================================================================

#[test]
fn reference_call_fast_mode() {
    let report = price(&contract(OptionType::Call, 100.0), 100);
    let v = report.valuation;

    assert!(v.price >= 0.0 && v.price < 100.0);
    assert!((0.0..=1.0).contains(&v.delta));
    assert!(v.gamma >= 0.0);

    assert_relative_eq!(v.price, 1.180_430_865_8, epsilon = 1e-8);
    assert_relative_eq!(v.delta, 0.099_621_857_3, epsilon = 1e-8);
    assert_relative_eq!(v.gamma, 0.008_797_478_6, epsilon = 1e-9);
}

#[test]
fn pricing_is_deterministic() {
    let params = contract(OptionType::Call, 100.0);
    let first = price(&params, 100);
    let second = price(&params, 100);

    assert_eq!(first, second);
}

#[test]
fn coarse_grid_is_sized_by_resolution_cap() {
    let report = price(&contract(OptionType::Call, 100.0), 50);

    assert_relative_eq!(report.dt(), 0.01, epsilon = 1e-15);
    assert_eq!(report.time_steps(), 101);
    assert_relative_eq!(report.valuation.price, 1.352_859_679_7, epsilon = 1e-8);
}

// =============================================================================
// MONEYNESS EXTREMES
// =============================================================================

#[test]
fn deep_out_of_the_money_is_worthless() {
    let v = price(&contract(OptionType::Call, 10.0), 100).valuation;
    assert!(v.price.abs() < 1e-10);
}

#[test]
fn deep_in_the_money_tracks_forward_intrinsic() {
    let params = contract(OptionType::Call, 500.0);
    let v = price(&params, 100).valuation;

    let forward_intrinsic = 500.0 - 135.0 * params.discount_factor();
    assert_relative_eq!(v.price, forward_intrinsic, max_relative = 1e-4);
    assert_relative_eq!(v.delta, 1.0, epsilon = 1e-3);
}

#[test]
fn spot_at_ceiling_reads_far_boundary() {
    let params = contract(OptionType::Call, 540.0);
    let report = price(&params, 100);

    let boundary = report.grid.price_ceiling() - 135.0 * params.discount_factor();
    assert_eq!(report.valuation.price, boundary);
    assert_eq!(report.valuation.delta, 0.0);
    assert_eq!(report.valuation.gamma, 0.0);
}

#[test]
fn spot_beyond_ceiling_clamps() {
    let at = price(&contract(OptionType::Call, 540.0), 100).valuation;
    let beyond = price(&contract(OptionType::Call, 900.0), 100).valuation;

    assert_eq!(at.price, beyond.price);
}

// =============================================================================
// PUT-CALL PARITY
// =============================================================================

#[test]
fn put_call_parity_is_exact() {
    let call = contract(OptionType::Call, 100.0);
    let put = call.with_option_type(OptionType::Put);

    let c = price(&call, 100).valuation;
    let p = price(&put, 100).valuation;

    assert_relative_eq!(
        c.price - p.price,
        100.0 - 135.0 * call.discount_factor(),
        epsilon = 1e-12
    );
    assert_relative_eq!(c.delta - p.delta, 1.0, epsilon = 1e-12);
    assert_eq!(c.gamma, p.gamma);
}

#[test]
fn reference_put() {
    let v = price(&contract(OptionType::Put, 100.0), 100).valuation;

    assert_relative_eq!(v.price, 29.596_403_173_4, epsilon = 1e-8);
    assert!((-1.0..=0.0).contains(&v.delta));
}

// =============================================================================
// CONVERGENCE TO CLOSED FORM
// =============================================================================

#[test]
fn refinement_converges_to_black_scholes() {
    let params = contract(OptionType::Call, 100.0);
    let exact = black_scholes(&params).price;

    let errors: Vec<f64> = [100, 400, 2000]
        .iter()
        .map(|&n| (price(&params, n).valuation.price - exact).abs())
        .collect();

    assert!(errors[0] > errors[1] && errors[1] > errors[2], "{errors:?}");
    assert!(errors[1] < 1e-3);
    assert!(errors[2] < 2e-4);
}

#[test]
fn at_the_money_close_to_black_scholes() {
    let params = ParameterSet::new(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
    let fd = price(&params, 200).valuation;
    let exact = black_scholes(&params);

    assert_relative_eq!(fd.price, exact.price, epsilon = 0.01);
    assert_relative_eq!(fd.delta, exact.delta, epsilon = 0.005);
    assert_relative_eq!(fd.gamma, exact.gamma, epsilon = 1e-3);
}

#[test]
fn low_volatility_uses_resolution_cap() {
    let params = ParameterSet::new(OptionType::Call, 100.0, 100.0, 0.03, 0.05, 2.0).unwrap();
    let report = price(&params, 100);

    assert_relative_eq!(report.dt(), 0.02, epsilon = 1e-15);
    assert_eq!(report.time_steps(), 101);
    assert_relative_eq!(report.valuation.price, 6.493_466_984_6, epsilon = 1e-8);
}

//! Property-based tests for sizing and parity invariants.

use parabolic_core::{OptionType, ParameterSet};
use parabolic_engine::prelude::*;
use proptest::prelude::*;

fn contract() -> impl Strategy<Value = ParameterSet> {
    (
        1.0..500.0_f64,
        1.0..500.0_f64,
        0.0..=1.0_f64,
        0.01..=1.0_f64,
        0.05..10.0_f64,
    )
        .prop_map(|(spot, strike, rate, vol, maturity)| {
            ParameterSet::new(OptionType::Call, spot, strike, rate, vol, maturity).unwrap()
        })
}

/// Contracts where drift does not swamp diffusion (`r / sigma^2 <= 10`).
///
/// Outside this region the explicit scheme on a coarse grid is
/// non-monotone and can oscillate without bound.
fn diffusive_contract() -> impl Strategy<Value = ParameterSet> {
    (
        1.0..500.0_f64,
        1.0..500.0_f64,
        0.0..=0.1_f64,
        0.1..=1.0_f64,
        0.1..5.0_f64,
    )
        .prop_map(|(spot, strike, rate, vol, maturity)| {
            ParameterSet::new(OptionType::Call, spot, strike, rate, vol, maturity).unwrap()
        })
}

proptest! {
    #[test]
    fn sized_grids_are_stable(params in contract(), n in 1usize..5000) {
        let spec = size_grid(&params, n);

        prop_assert!(spec.is_stable(params.volatility()));
        prop_assert!(spec.temporal_step_size() <= params.maturity() / 100.0);
        prop_assert!(spec.temporal_steps() >= 100);
        prop_assert_eq!(spec.price_ceiling(), 4.0 * params.strike());
        prop_assert_eq!(spec.node_count(), n + 1);
    }

    #[test]
    fn time_steps_cover_maturity(params in contract(), n in 1usize..5000) {
        let spec = size_grid(&params, n);
        let covered = spec.temporal_steps() as f64 * spec.temporal_step_size();

        prop_assert!(covered > params.maturity() * (1.0 - 1e-12));
    }

    #[test]
    fn parity_holds_for_any_call_valuation(
        params in contract(),
        price in 0.0..100.0_f64,
        delta in 0.0..=1.0_f64,
        gamma in 0.0..1.0_f64,
    ) {
        let call = parabolic_core::Valuation::new(price, delta, gamma);
        let put = adjust_for_put(call, &params.with_option_type(OptionType::Put));
        let forward = params.spot() - params.strike() * params.discount_factor();

        prop_assert!((call.price - put.price - forward).abs() < 1e-9);
        prop_assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
        prop_assert_eq!(call.gamma, put.gamma);
        prop_assert_eq!(adjust_for_put(call, &params), call);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn solved_grids_respect_boundaries(params in diffusive_contract(), n in 2usize..60) {
        let spec = size_grid(&params, n);
        let grid = solve(&params, &spec).unwrap();
        let far = spec.price_ceiling() - params.strike() * params.discount_factor();

        prop_assert_eq!(grid.lower_boundary(), 0.0);
        prop_assert!((grid.upper_boundary() - far).abs() <= 1e-9 * far.abs().max(1.0));
        prop_assert!(grid.values().iter().all(|v| v.is_finite() && *v > -1e-9));
        prop_assert!(evaluate(&grid, &spec, params.spot()).unwrap().is_finite());
    }
}

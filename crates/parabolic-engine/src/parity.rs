//! Put values from call values via put-call parity.
//!
//! For European options on a non-dividend-paying underlying,
//!
//! ```text
//! C - P = S - K exp(-r T)
//! ```
//!
//! Differentiating once removes `K exp(-r T)` and turns `S` into 1, and
//! differentiating twice removes both, so Gamma is shared by the pair.

use parabolic_core::{ParameterSet, Valuation};

/// Converts a call valuation into the valuation of `params`' option type.
///
/// Identity for calls. For puts: `P = C - S + K exp(-r T)`,
/// `delta_P = delta_C - 1`, Gamma unchanged.
pub fn adjust_for_put(call: Valuation, params: &ParameterSet) -> Valuation {
    if params.is_call() {
        return call;
    }

    let price = call.price - params.spot() + params.strike() * params.discount_factor();
    Valuation::new(price, call.delta - 1.0, call.gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parabolic_core::OptionType;

    #[test]
    fn test_call_is_identity() {
        let p = ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
        let call = Valuation::new(1.18, 0.1, 0.009);
        assert_eq!(adjust_for_put(call, &p), call);
    }

    #[test]
    fn test_put_from_call() {
        let p = ParameterSet::new(OptionType::Put, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
        let call = Valuation::new(1.18, 0.1, 0.009);
        let put = adjust_for_put(call, &p);

        let pv_strike = 135.0 * (-0.05_f64).exp();
        assert_relative_eq!(put.price, 1.18 - 100.0 + pv_strike, epsilon = 1e-12);
        assert_relative_eq!(put.delta, -0.9, epsilon = 1e-12);
        assert_relative_eq!(put.gamma, 0.009);
    }
}

//! Closed-form Black-Scholes reference values.
//!
//! Used to measure discretization error of the finite-difference engine.

use parabolic_core::{ParameterSet, Valuation};
use parabolic_math::distributions::{normal_cdf, normal_pdf};

/// Black-Scholes price, Delta and Gamma for `params`' option type.
///
/// ```text
/// d1 = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))
/// d2 = d1 - sigma sqrt(T)
/// C  = S N(d1) - K exp(-rT) N(d2)
/// P  = K exp(-rT) N(-d2) - S N(-d1)
/// ```
pub fn black_scholes(params: &ParameterSet) -> Valuation {
    let s = params.spot();
    let k = params.strike();
    let r = params.rate();
    let sigma = params.volatility();
    let t = params.maturity();

    let sqrt_t = t.sqrt();
    let vol_sqrt_t = sigma * sqrt_t;
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let pv_strike = k * (-r * t).exp();

    let gamma = normal_pdf(d1) / (s * vol_sqrt_t);

    if params.is_call() {
        Valuation::new(
            s * normal_cdf(d1) - pv_strike * normal_cdf(d2),
            normal_cdf(d1),
            gamma,
        )
    } else {
        Valuation::new(
            pv_strike * normal_cdf(-d2) - s * normal_cdf(-d1),
            normal_cdf(d1) - 1.0,
            gamma,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parabolic_core::OptionType;

    #[test]
    fn test_textbook_atm_call() {
        // Hull: S = K = 100, r = 5%, sigma = 20%, T = 1 -> C = 10.4506
        let p = ParameterSet::new(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        let v = black_scholes(&p);
        assert_relative_eq!(v.price, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_relative_eq!(v.delta, 0.636_830_651_175_619, epsilon = 1e-9);
        assert_relative_eq!(v.gamma, 0.018_762_017_345_846_895, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_otm_call() {
        let p = ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap();
        let v = black_scholes(&p);
        assert_relative_eq!(v.price, 1.141_354_349_409_457_6, epsilon = 1e-9);
        assert_relative_eq!(v.delta, 0.124_964_271_125_582_4, epsilon = 1e-9);
    }

    #[test]
    fn test_parity_holds() {
        let call = ParameterSet::new(OptionType::Call, 90.0, 100.0, 0.03, 0.35, 2.0).unwrap();
        let put = call.with_option_type(OptionType::Put);
        let c = black_scholes(&call);
        let p = black_scholes(&put);

        assert_relative_eq!(
            c.price - p.price,
            90.0 - 100.0 * (-0.06_f64).exp(),
            epsilon = 1e-10
        );
        assert_relative_eq!(c.delta - p.delta, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.gamma, p.gamma);
    }
}

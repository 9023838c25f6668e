//! Standard normal distribution.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Cumulative distribution function of the standard normal.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

/// Probability density function of the standard normal.
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    Normal::standard().pdf(x)
}

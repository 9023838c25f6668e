//! Central finite-difference stencils on uniformly spaced samples.
//!
//! Both stencils need a neighbour on each side, so they are only defined at
//! interior nodes. At the first or last node (or past the end) they return
//! `None`; callers decide what an edge sensitivity should be.

/// First derivative `(f[i+1] - f[i-1]) / 2h`.
///
/// # Example
///
/// ```rust
/// use parabolic_math::differences::central_first;
///
/// let f = [0.0, 1.0, 4.0, 9.0];
/// assert_eq!(central_first(&f, 1, 1.0), Some(2.0));
/// assert_eq!(central_first(&f, 0, 1.0), None);
/// ```
#[inline]
pub fn central_first(values: &[f64], index: usize, step: f64) -> Option<f64> {
    if index == 0 || index + 1 >= values.len() {
        return None;
    }
    Some((values[index + 1] - values[index - 1]) / (2.0 * step))
}

/// Second derivative `(f[i+1] - 2 f[i] + f[i-1]) / h^2`.
#[inline]
pub fn central_second(values: &[f64], index: usize, step: f64) -> Option<f64> {
    if index == 0 || index + 1 >= values.len() {
        return None;
    }
    Some((values[index + 1] - 2.0 * values[index] + values[index - 1]) / (step * step))
}

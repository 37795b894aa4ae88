//! Process-wide π derived from the Bailey–Borwein–Plouffe series

use crate::float_trait::Float;

use lazy_static::lazy_static;

/// Series truncation used for the process-wide [struct@PI]
pub const PI_SERIES_TERMS: usize = 500;

/// Evaluate the Bailey–Borwein–Plouffe series truncated to `n_terms` terms,
/// summed in ascending term order
///
/// The series gains more than a hexadecimal digit per term, so an `f64`
/// saturates after a dozen terms or so; the running 16^-k factor underflows
/// to zero long before a long truncation runs out.
pub fn bbp_series(n_terms: usize) -> f64 {
    let mut sum = 0.0;
    let mut sixteenth = 1.0;
    for k in 0..n_terms {
        let k8 = (8 * k) as f64;
        sum += sixteenth
            * (4.0 / (k8 + 1.0) - 2.0 / (k8 + 4.0) - 1.0 / (k8 + 5.0) - 1.0 / (k8 + 6.0));
        sixteenth /= 16.0;
    }
    sum
}

lazy_static! {
    /// π computed once on first use, read-only afterwards
    pub static ref PI: f64 = bbp_series(PI_SERIES_TERMS);
}

/// The process-wide π cast into the pipeline float type
pub fn pi<T>() -> T
where
    T: Float,
{
    T::from(*PI).unwrap()
}

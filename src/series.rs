//! Truncated Taylor series summation around an anchor

use crate::float_trait::Float;

/// Iterative factorial accumulated in the float type
///
/// Accumulating in floating point keeps term counts past 20 from overflowing
/// a fixed-width integer; past 170 the value saturates to infinity and the
/// corresponding series terms vanish.
pub fn factorial<T>(n: u32) -> T
where
    T: Float,
{
    let mut acc = T::one();
    for k in 1..=n {
        acc = acc * T::from(k).unwrap();
    }
    acc
}

/// The `n`-th series term
///
/// The n-th derivative of sine is periodic with order four, so n mod 4 picks
/// which of the anchor's seed values enters the numerator and with what sign:
/// (sin, cos, -sin, -cos).
pub(crate) fn term<T>(n: u32, (sin_val, cos_val): (T, T), dif: T) -> T
where
    T: Float,
{
    let derivative = match n % 4 {
        0 => sin_val,
        1 => cos_val,
        2 => -sin_val,
        _ => -cos_val,
    };
    derivative * dif.powi(n as i32) / factorial(n)
}

/// Left-to-right running sum of the first `n_terms` terms, ascending order
///
/// No compensated summation: with the offset bounded by π/4 the terms decay
/// fast enough for a plain accumulator.
pub(crate) fn sum_series<T>(n_terms: u32, sin_cos: (T, T), dif: T) -> T
where
    T: Float,
{
    (0..n_terms).fold(T::zero(), |acc, n| acc + term(n, sin_cos, dif))
}

//! Reduction of an arbitrary angle into [-π, π]

use crate::consts::pi;
use crate::float_trait::Float;

/// Shift `val` by a whole number of turns so it lands in [-π, π]
///
/// Rust's `%` on floats is a truncated remainder and keeps the sign of its
/// dividend, while the reduction needs a floored modulo landing in [0, 2π)
/// before re-centering. The negative branch adds one turn back to restore
/// that contract.
///
/// Non-finite input propagates as NaN.
pub fn reduce<T>(val: T) -> T
where
    T: Float,
{
    let pi = pi::<T>();
    let two_pi = pi + pi;
    let mut rem = (val + pi) % two_pi;
    if rem < T::zero() {
        rem = rem + two_pi;
    }
    rem - pi
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use rand::prelude::*;

    const PI: f64 = std::f64::consts::PI;
    const TAU: f64 = std::f64::consts::TAU;

    #[test]
    fn stays_in_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10_000 {
            let x: f64 = rng.random_range(-1e6..1e6);
            let r = reduce(x);
            assert!((-PI..=PI).contains(&r), "reduce({x}) = {r} is out of range");
        }
    }

    #[test]
    fn shifts_by_whole_turns() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10_000 {
            let x: f64 = rng.random_range(-1e6..1e6);
            let turns = (x - reduce(x)) / TAU;
            assert_abs_diff_eq!(turns, turns.round(), epsilon = 1e-9);
        }
    }

    #[test]
    fn identity_inside_the_interval() {
        for &x in &[-3.0, -1.5, -1e-3, 0.0, 0.5, 1.0, 3.0] {
            assert_abs_diff_eq!(reduce(x), x, epsilon = 4.0 * f64::EPSILON);
        }
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10_000 {
            let r = reduce(rng.random_range(-1e3..1e3));
            assert_abs_diff_eq!(reduce(r), r, epsilon = 4.0 * f64::EPSILON);
        }
    }

    #[test]
    fn negative_arguments_wrap_up() {
        assert_abs_diff_eq!(reduce(-PI - 0.5), PI - 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(reduce(-5.0 * TAU + 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn whole_turns_collapse_to_zero() {
        for k in -5_i32..=5 {
            assert_abs_diff_eq!(reduce(f64::from(k) * TAU), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn non_finite_propagates() {
        assert!(reduce(f64::NAN).is_nan());
        assert!(reduce(f64::INFINITY).is_nan());
        assert!(reduce(f64::NEG_INFINITY).is_nan());
    }
}

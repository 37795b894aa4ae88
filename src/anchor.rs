//! Expansion points for the series and their exact trigonometric seeds

use crate::consts::pi;
use crate::float_trait::Float;

/// One of the five fixed angles the series may be expanded about
///
/// Anchoring at the nearest quarter-turn keeps the offset within π/4, which
/// is what lets a short series reach full double precision instead of
/// expanding about zero alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    NegPi,
    NegHalfPi,
    Zero,
    HalfPi,
    Pi,
}

impl Anchor {
    /// Select the anchor nearest to a reduced value in [-π, π]
    ///
    /// The thresholds are ordered and non-overlapping; everything from 0.75π
    /// up, NaN included, falls through to the last arm.
    pub fn nearest<T>(reduced: T) -> Self
    where
        T: Float,
    {
        let pi = pi::<T>();
        if reduced < pi * T::from(-0.75).unwrap() {
            Self::NegPi
        } else if reduced < pi * T::from(-0.25).unwrap() {
            Self::NegHalfPi
        } else if reduced < pi * T::from(0.25).unwrap() {
            Self::Zero
        } else if reduced < pi * T::from(0.75).unwrap() {
            Self::HalfPi
        } else {
            Self::Pi
        }
    }

    /// The angle the series is expanded about
    pub fn value<T>(&self) -> T
    where
        T: Float,
    {
        let pi = pi::<T>();
        let half = T::from(0.5).unwrap();
        match self {
            Self::NegPi => -pi,
            Self::NegHalfPi => -(pi * half),
            Self::Zero => T::zero(),
            Self::HalfPi => pi * half,
            Self::Pi => pi,
        }
    }

    /// Exact (sine, cosine) pair at the anchor, seeding the derivative cycle
    pub fn sin_cos<T>(&self) -> (T, T)
    where
        T: Float,
    {
        let zero = T::zero();
        let one = T::one();
        match self {
            Self::NegPi | Self::Pi => (zero, -one),
            Self::NegHalfPi => (-one, zero),
            Self::Zero => (zero, one),
            Self::HalfPi => (one, zero),
        }
    }
}

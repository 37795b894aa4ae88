use crate::anchor::Anchor;
use crate::error::SineError;
use crate::float_trait::Float;
use crate::range_reduction::reduce;
use crate::series::sum_series;

use macro_const::macro_const;
use serde::{Deserialize, Serialize};

/// Default series truncation; convergence saturates long before this many
/// terms given the π/4 offset bound, so callers may tune it down
pub const DEFAULT_N_TERMS: u32 = 50;

macro_const! {
    const DOC: &str = r"
    Sine approximated by a truncated Taylor series about the nearest quarter-turn

    $$
    \sin x \approx \sum_{n=0}^{N-1} \frac{\sin^{(n)}(a)}{n!} \left(x - a\right)^n
    $$
    where $a$ is the closest of $-\pi$, $-\pi/2$, $0$, $\pi/2$, $\pi$ after
    reducing $x$ into $[-\pi, \pi]$. The offset $|x - a| \leq \pi/4$ is small
    enough for the default $N = 50$ to reach full double precision.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaylorSine {
    n_terms: u32,
}

impl TaylorSine {
    pub fn new(n_terms: u32) -> Self {
        Self { n_terms }
    }

    /// Validating constructor for signed term counts
    pub fn with_terms(n_terms: i32) -> Result<Self, SineError> {
        if n_terms < 0 {
            return Err(SineError::NegativeTermCount { n_terms });
        }
        Ok(Self::new(n_terms as u32))
    }

    pub fn n_terms(&self) -> u32 {
        self.n_terms
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    /// Approximate sine of `x`: reduce into [-π, π], expand about the nearest
    /// anchor, sum the series over the bounded offset
    pub fn eval<T>(&self, x: T) -> T
    where
        T: Float,
    {
        let reduced = reduce(x);
        let anchor = Anchor::nearest(reduced);
        let dif = reduced - anchor.value();
        sum_series(self.n_terms, anchor.sin_cos(), dif)
    }
}

impl Default for TaylorSine {
    fn default() -> Self {
        Self::new(DEFAULT_N_TERMS)
    }
}

/// Approximate sine of `x` with the default term count
pub fn sine<T>(x: T) -> T
where
    T: Float,
{
    TaylorSine::default().eval(x)
}

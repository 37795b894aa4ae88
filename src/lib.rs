#![doc = include_str!("../README.md")]

mod anchor;
pub use anchor::Anchor;

mod consts;
pub use consts::{PI, PI_SERIES_TERMS, bbp_series, pi};

mod error;
pub use error::SineError;

mod float_trait;
pub use float_trait::Float;

mod range_reduction;
pub use range_reduction::reduce;

mod series;
#[doc(hidden)]
pub use series::factorial;

mod sine;
pub use sine::{DEFAULT_N_TERMS, TaylorSine, sine};

use std::fmt::{Debug, Display};

/// Floating-point abstraction used across the whole pipeline
pub trait Float:
    num_traits::Float + num_traits::FromPrimitive + PartialOrd + Debug + Display + Send + Sync + 'static
{
}

impl Float for f32 {}

impl Float for f64 {}

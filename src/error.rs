/// Error returned from [crate::TaylorSine] construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SineError {
    #[error("term count {n_terms} is negative, the series needs a non-negative number of terms")]
    NegativeTermCount { n_terms: i32 },
}

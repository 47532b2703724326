use thiserror::Error;

/// Errors raised while building an interpolator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpolatorError {
    #[error("a color sequence needs at least 2 colors, got {count}")]
    NotEnoughColors { count: usize },

    #[error("cannot concatenate an empty list of interpolators")]
    EmptyConcat,
}

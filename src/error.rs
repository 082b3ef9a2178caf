use thiserror::Error;

/// Errors surfaced to callers of the density and sampling primitives.
///
/// Numerically degenerate densities are not errors: they come back as
/// `f64::NEG_INFINITY`. A NaN concentration is not an error either and
/// propagates as NaN through the samplers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CddmError {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("von Mises rejection loop exceeded {limit} iterations")]
    RejectionLimit { limit: usize },

    #[error("diffusion walk did not reach the boundary within {limit} steps")]
    StepLimit { limit: usize },

    #[error("batch length mismatch: {choices} choices vs {times} times")]
    ShapeMismatch { choices: usize, times: usize },
}

pub type CddmResult<T> = Result<T, CddmError>;

/// Fails with `InvalidParameter` unless `value >= 0`. NaN fails too.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> CddmResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CddmError::InvalidParameter { name, value })
    }
}

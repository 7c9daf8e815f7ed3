use thiserror::Error;

/// Errors raised by the guarded constructors and operators of [`TrigPoly`](crate::TrigPoly).
///
/// Arithmetic never fails: operands of different lengths are zero-extended.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TrigPolyError {
    /// A sampling constructor was asked for a negative number of nodes.
    #[error("invalid argument: sample count must be non-negative, got {0}")]
    NegativeSampleCount(i64),

    /// A derivative of negative order was requested.
    #[error("invalid argument: derivative order must be non-negative, got {0}")]
    NegativeDerivativeOrder(i64),
}

impl TrigPolyError {
    /// Whether this is an invalid-argument error. Every current variant is.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeSampleCount(_) | Self::NegativeDerivativeOrder(_)
        )
    }
}

/// Result type alias for fallible polynomial operations.
pub type TrigPolyResult<T> = core::result::Result<T, TrigPolyError>;

//! Error type used by the crate.

use thiserror::Error;

/// Error returned by vector operations that have no defined result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum VecError {
    /// The operation needs a direction, but one of the vectors has zero length.
    #[error("vector has zero length")]
    ZeroLengthVector,
    /// Vector was divided by a zero scalar.
    #[error("division of a vector by zero")]
    DivideByZero,
}

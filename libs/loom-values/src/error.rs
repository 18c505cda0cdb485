//! # Array Errors
//!
//! Runtime errors raised by indexed access. Each variant keeps the offending
//! values for diagnostics.

use thiserror::Error;

/// Errors that can occur while reading, writing or growing an array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Index outside the signed 32-bit index domain.
    #[error("index number too large: {index}")]
    IndexTooLarge { index: i64 },

    /// Negative index, or a read at or past the logical size.
    #[error("array index out of range: index: {index}, size: {size}")]
    IndexOutOfRange { index: i64, size: usize },

    /// No capacity within the hard limit can hold the index.
    #[error("array size exceeded: index {index} does not fit in {max} slots")]
    ArraySizeExceeded { index: usize, max: usize },

    /// The backing storage could not be reallocated.
    #[error("failed to allocate array storage of {requested} slots")]
    AllocationFailure { requested: usize },
}

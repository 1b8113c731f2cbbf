//! Error types for sequence combinators.
//!
//! Almost every combinator is total: positional operations clamp and
//! lookups return `Option`. The variants here cover the few inputs that are
//! rejected outright.

use thiserror::Error;

/// Errors raised by the non-total sequence operations.
///
/// # Examples
///
/// ```rust
/// use listcomb::{Sequence, SequenceError};
///
/// let rows: Sequence<Sequence<i32>> = Sequence::empty();
/// assert_eq!(rows.transpose(), Err(SequenceError::EmptyMatrix));
/// assert_eq!(
///     format!("{}", SequenceError::EmptyMatrix),
///     "transpose: at least one row is required to determine the column count"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `transpose` was called on a matrix with zero rows.
    #[error("transpose: at least one row is required to determine the column count")]
    EmptyMatrix,

    /// A count argument that must be non-negative was negative.
    #[error("{operation}: count must be non-negative, got {count}")]
    NegativeCount {
        /// The operation that rejected the count.
        operation: &'static str,
        /// The rejected count.
        count: i64,
    },
}

/// Result alias used by the fallible sequence operations.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

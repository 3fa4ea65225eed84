use thiserror::Error;

/// Everything that can stop a sort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError<E> {
    /// The requested bounds do not lie within `1..=border`. Raised before any element moved.
    #[error("invalid sort range {low}..={high} for sequence of border {border}")]
    InvalidRange {
        low: usize,
        high: usize,
        border: usize,
    },
    /// A partition scan ran past the range it was given, the comparison function is not a strict
    /// weak order.
    #[error("invalid order function for sorting")]
    InvalidOrder,
    /// The comparison function failed, its error is passed through unchanged.
    #[error("comparison failed: {0}")]
    Comparator(E),
}

impl<E> SortError<E> {
    /// The comparison function's own error, if that is what stopped the sort.
    pub fn into_comparator(self) -> Option<E> {
        match self {
            SortError::Comparator(err) => Some(err),
            _ => None,
        }
    }
}

/// Raised by the natural order for two values that have none, e.g. `NaN` and anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempt to compare two incomparable values")]
pub struct Incomparable;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort algorithm `{0}`, expected `partition` or `median`")]
pub struct UnknownAlgorithm(pub String);

/// Failures of the positional helpers in [`crate::utils`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("position {pos} out of bounds for sequence of border {border}")]
    PositionOutOfBounds { pos: usize, border: usize },
    #[error("invalid range {low}..={high} for sequence of border {border}")]
    InvalidRange {
        low: usize,
        high: usize,
        border: usize,
    },
    #[error("invalid value at index {index} for concat, expected a string or number")]
    NotAString { index: usize },
}

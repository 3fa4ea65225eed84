use std::cmp::Ordering;

/// Why a sort did not run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Abort<E> {
    /// The comparison function itself failed, carrying its error verbatim.
    Comparator(E),
    /// The comparison function was detected to not be a strict weak order.
    InvalidOrder,
}

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn try_sort_by<T, F, E>(arr: &mut [T], is_less: F) -> Result<(), Abort<E>>
    where
        F: FnMut(&T, &T) -> Result<bool, E>;

    /// Largest input the implementation should be fed by the test suite.
    ///
    /// Implementations with linear recursion depth on adversarial inputs lower this to stay clear
    /// of the test thread stack limit.
    fn max_len() -> usize {
        usize::MAX
    }
}

pub mod patterns;

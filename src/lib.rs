//! In-place, comparator driven operations over 1-based indexable sequences.
//!
//! The interesting part is the sort engine in [`unstable`]: two quicksort variants that only ever
//! touch the sequence through [`Sequence::get_at`] and [`Sequence::swap_at`], never allocate, and
//! leave the sequence a permutation of its original elements no matter how the comparison function
//! behaves. [`utils`] holds the simple positional helpers that share the same accessor.
//!
//! ```ignore
//! use seqsort::{Algorithm, SortOptions};
//!
//! let mut v = vec![5, 3, 1, 4, 2];
//! SortOptions::new(Algorithm::Median).sort(&mut v)?;
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                // A total order is never incomparable, only a broken `Ord` impl ends up here.
                if let Err(err) = sort(arr) {
                    panic!("{err}");
                }
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                if let Err(err) = sort_by(arr, $crate::order::by_ordering(compare)) {
                    panic!("{err}");
                }
            }

            #[inline]
            fn try_sort_by<T, F, E>(arr: &mut [T], is_less: F) -> Result<(), sort_test_tools::Abort<E>>
            where
                F: FnMut(&T, &T) -> Result<bool, E>,
            {
                sort_by(arr, is_less).map_err(|err| match err {
                    $crate::SortError::Comparator(err) => sort_test_tools::Abort::Comparator(err),
                    $crate::SortError::InvalidOrder => sort_test_tools::Abort::InvalidOrder,
                    $crate::SortError::InvalidRange { .. } => {
                        unreachable!("whole slice sorts have no range to reject")
                    }
                })
            }

            fn max_len() -> usize {
                $max_len
            }
        }
    };
}

use std::ops::RangeInclusive;

pub mod error;
pub mod observe;
pub mod options;
pub mod order;
pub mod sequence;
pub mod unstable;
pub mod utils;

pub use error::{Incomparable, SequenceError, SortError, UnknownAlgorithm};
pub use observe::{Observer, SortEvent};
pub use options::{Algorithm, SortOptions};
pub use sequence::{GrowableSequence, Sequence};

/// Sorts all of `seq` in its natural order with the chosen `algorithm`.
///
/// Fails with [`SortError::Comparator`] carrying [`Incomparable`] as soon as two elements have no
/// natural order between them, e.g. a `NaN`.
pub fn sort<S>(seq: &mut S, algorithm: Algorithm) -> Result<(), SortError<Incomparable>>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    SortOptions::new(algorithm).sort(seq)
}

/// Sorts all of `seq` with the chosen `algorithm`, ordered by `is_less`.
///
/// `is_less(a, b)` must return `Ok(true)` iff `a` sorts strictly before `b`. Any error it returns
/// stops the sort and is handed back inside [`SortError::Comparator`].
pub fn sort_by<S, F, E>(seq: &mut S, algorithm: Algorithm, is_less: F) -> Result<(), SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    SortOptions::new(algorithm).sort_by(seq, is_less)
}

/// Sorts the 1-based inclusive `range` of `seq` with the chosen `algorithm`, ordered by `is_less`.
///
/// Positions outside `range` are never read or written. A non-empty range reaching past
/// [`Sequence::border`] or starting at 0 fails with [`SortError::InvalidRange`] before anything
/// moved.
pub fn sort_range_by<S, F, E>(
    seq: &mut S,
    algorithm: Algorithm,
    range: RangeInclusive<usize>,
    is_less: F,
) -> Result<(), SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    SortOptions::new(algorithm).range(range).sort_by(seq, is_less)
}

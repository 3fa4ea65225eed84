//! The sort engine. Neither variant keeps equal elements in their original order.
//!
//! Both work purely through positions: elements are compared where they sit and only ever moved by
//! [`Sequence::swap_at`], so an aborted sort (comparison error or panic) leaves a permutation of the
//! original elements behind.

use crate::error::SortError;
use crate::sequence::Sequence;

pub mod median_sort;
pub mod partition_sort;

/// `is_less(seq[a], seq[b])`, with a failing comparison wrapped into [`SortError::Comparator`].
#[inline(always)]
pub(crate) fn is_less_at<S, F, E>(
    seq: &S,
    a: usize,
    b: usize,
    is_less: &mut F,
) -> Result<bool, SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    is_less(seq.get_at(a), seq.get_at(b)).map_err(SortError::Comparator)
}

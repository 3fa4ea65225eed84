//! Plain recursive quicksort with a Lomuto partition around the last element of every range.
//!
//! Simple and fast on random input, but there is no pivot sampling and no tail-call elimination:
//! sorted, reverse sorted and all-equal input recurse once per element. Callers that can't reserve
//! stack proportional to the input length should use [`super::median_sort`].

use crate::error::{Incomparable, SortError};
use crate::observe::Probe;
use crate::order::natural_less;
use crate::sequence::Sequence;
use crate::unstable::is_less_at;

// Linear recursion depth, keep the shared test suite below what a test thread's stack survives.
sort_impl!("partition_sort_unstable", 2_048);

#[inline]
pub fn sort<S>(seq: &mut S) -> Result<(), SortError<Incomparable>>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    sort_by(seq, natural_less)
}

#[inline]
pub fn sort_by<S, F, E>(seq: &mut S, mut is_less: F) -> Result<(), SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    let border = seq.border();
    sort_range(seq, 1, border, &mut is_less, &mut Probe::new(None))
}

/// Sorts `low..=high`, which must lie within `1..=seq.border()` unless it is empty.
pub(crate) fn sort_range<S, F, E>(
    seq: &mut S,
    low: usize,
    high: usize,
    is_less: &mut F,
    probe: &mut Probe<'_>,
) -> Result<(), SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    quicksort(seq, low, high, is_less, probe)
}

fn quicksort<S, F, E>(
    seq: &mut S,
    p: usize,
    r: usize,
    is_less: &mut F,
    probe: &mut Probe<'_>,
) -> Result<(), SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    if p >= r {
        return Ok(());
    }

    probe.enter(p, r);

    let q = partition(seq, p, r, is_less)?;
    probe.partitioned(p, r, q);

    // p >= 1, so q - 1 can't wrap.
    quicksort(seq, p, q - 1, is_less, probe)?;
    quicksort(seq, q + 1, r, is_less, probe)?;

    probe.leave();
    Ok(())
}

/// Moves every element of `p..r` that is less than the pivot `seq[r]` to the front of the range,
/// then puts the pivot right behind them.
///
/// Returns the final position of the pivot. The comparison always sees the candidate first and
/// the pivot second. Only positions inside `p..=r` are read or written, whatever `is_less` answers.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<S, F, E>(seq: &mut S, p: usize, r: usize, is_less: &mut F) -> Result<usize, SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    if r - p == 1 {
        // Adjacent pair, one comparison settles it.
        if is_less_at(seq, p, r, is_less)? {
            return Ok(r);
        }

        seq.swap_at(p, r);
        return Ok(p);
    }

    // Invariant: seq[p..=i] < pivot <= seq[i + 1..j].
    let mut i = p - 1;
    for j in p..r {
        if is_less_at(seq, j, r, is_less)? {
            i += 1;
            if i != j {
                seq.swap_at(i, j);
            }
        }
    }

    let q = i + 1;
    if q != r {
        seq.swap_at(q, r);
    }

    Ok(q)
}

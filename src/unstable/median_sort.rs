//! Quicksort with median-of-three pivot selection and a Hoare partition, after Sedgewick's
//! *Algorithms in Modula-3*.
//!
//! Only the smaller side of every partition is sorted recursively, the larger one is handled by
//! the next iteration of the loop, which bounds the stack depth to *O*(log(*n*)) on any input.
//! The partition scans are unguarded against the range ends for valid orders, the median-of-three
//! leaves a sentinel on both sides. A comparison function that walks a scan past such a sentinel
//! can't be a strict weak order, and the sort stops with [`SortError::InvalidOrder`] instead of
//! leaving the range.

use crate::error::{Incomparable, SortError};
use crate::observe::Probe;
use crate::order::natural_less;
use crate::sequence::Sequence;
use crate::unstable::is_less_at;

sort_impl!("median_sort_unstable");

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
    auxsort(seq, low, high, is_less, probe)
}

fn auxsort<S, F, E>(
    seq: &mut S,
    mut l: usize,
    mut u: usize,
    is_less: &mut F,
    probe: &mut Probe<'_>,
) -> Result<(), SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    if l >= u {
        return Ok(());
    }

    probe.enter(l, u);

    while l < u {
        let Some(mid) = median_of_three(seq, l, u, is_less)? else {
            // Two or three elements, already in order.
            break;
        };

        let i = hoare_partition(seq, l, u, mid, is_less)?;
        probe.partitioned(l, u, i);

        // seq[l..i] <= seq[i] <= seq[i + 1..=u]
        if i - l < u - i {
            auxsort(seq, l, i - 1, is_less, probe)?;
            l = i + 1;
        } else {
            auxsort(seq, i + 1, u, is_less, probe)?;
            u = i - 1;
        }
    }

    probe.leave();
    Ok(())
}

/// Orders `seq[l]`, `seq[mid]` and `seq[u]` among themselves, `mid` being the middle of the range.
///
/// Returns `None` if the range has at most three elements, those are fully sorted afterwards.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn median_of_three<S, F, E>(
    seq: &mut S,
    l: usize,
    u: usize,
    is_less: &mut F,
) -> Result<Option<usize>, SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    if is_less_at(seq, u, l, is_less)? {
        seq.swap_at(l, u);
    }

    if u - l == 1 {
        return Ok(None);
    }

    let mid = l + (u - l) / 2;
    if is_less_at(seq, mid, l, is_less)? {
        seq.swap_at(mid, l);
    } else if is_less_at(seq, u, mid, is_less)? {
        seq.swap_at(mid, u);
    }

    if u - l == 2 {
        return Ok(None);
    }

    Ok(Some(mid))
}

/// Partitions `l..=u` around the median at `mid` and returns where the pivot ended up.
///
/// Expects `seq[l] <= seq[mid] <= seq[u]`. The pivot is parked at `u - 1` for the duration of the
/// scans, only `l + 1..=u - 2` gets rearranged.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn hoare_partition<S, F, E>(
    seq: &mut S,
    l: usize,
    u: usize,
    mid: usize,
    is_less: &mut F,
) -> Result<usize, SortError<E>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
{
    let pivot = u - 1;
    seq.swap_at(mid, pivot);

    let mut i = l;
    let mut j = pivot;
    loop {
        // Invariant: seq[l..=i] <= pivot <= seq[j..=u].
        loop {
            if i == u {
                return Err(invalid_order(l, u));
            }
            i += 1;

            if !is_less_at(seq, i, pivot, is_less)? {
                break;
            }
        }

        loop {
            if j == l {
                return Err(invalid_order(l, u));
            }
            j -= 1;

            if !is_less_at(seq, pivot, j, is_less)? {
                break;
            }
        }

        if j < i {
            break;
        }

        // j <= u - 2 here, the parked pivot never moves during the scans.
        seq.swap_at(i, j);
    }

    if i != pivot {
        seq.swap_at(pivot, i);
    }

    Ok(i)
}

#[cold]
fn invalid_order<E>(l: usize, u: usize) -> SortError<E> {
    tracing::warn!(low = l, high = u, "invalid order function for sorting");
    SortError::InvalidOrder
}

//! Ready made `is_less` functions.

use std::cmp::Ordering;

use crate::error::Incomparable;

/// The natural order of `T`. Values `PartialOrd` leaves unordered, like `NaN`, are an error
/// instead of silently comparing as not-less.
#[inline]
pub fn natural_less<T>(a: &T, b: &T) -> Result<bool, Incomparable>
where
    T: PartialOrd + ?Sized,
{
    match a.partial_cmp(b) {
        Some(ord) => Ok(ord == Ordering::Less),
        None => Err(Incomparable),
    }
}

/// Adapts a three-way comparison into an infallible `is_less`.
#[inline]
pub fn by_ordering<T, F>(
    mut compare: F,
) -> impl FnMut(&T, &T) -> Result<bool, std::convert::Infallible>
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| Ok(compare(a, b) == Ordering::Less)
}

//! Positional helpers over the same accessor the sort engine uses. None of them need more than
//! [`Sequence::set_at`] and growing or shrinking at the border.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::error::SequenceError;
use crate::sequence::{GrowableSequence, Sequence};

/// Inserts `value` at `pos`, shifting `pos..=border` up by one.
///
/// `pos` may be anything in `1..=border + 1`, the latter appends.
pub fn insert<S>(seq: &mut S, pos: usize, value: S::Item) -> Result<(), SequenceError>
where
    S: GrowableSequence + ?Sized,
{
    let border = seq.border();
    if pos == 0 || pos > border + 1 {
        return Err(SequenceError::PositionOutOfBounds { pos, border });
    }

    // Every element from `pos` on moves one slot up, the last one lands past the border.
    let mut carry = value;
    for i in pos..=border {
        carry = seq.set_at(i, carry);
    }
    seq.push(carry);

    Ok(())
}

/// Appends `value` at `border + 1`.
#[inline]
pub fn push<S>(seq: &mut S, value: S::Item)
where
    S: GrowableSequence + ?Sized,
{
    seq.push(value);
}

/// Removes and returns the element at `border`, `None` for an empty sequence.
#[inline]
pub fn pop<S>(seq: &mut S) -> Option<S::Item>
where
    S: GrowableSequence + ?Sized,
{
    seq.pop()
}

/// Removes and returns the element at `pos`, shifting everything above it down by one.
///
/// Nothing happens for a position outside `1..=border`.
pub fn remove<S>(seq: &mut S, pos: usize) -> Option<S::Item>
where
    S: GrowableSequence + ?Sized,
{
    let border = seq.border();
    if pos == 0 || pos > border {
        return None;
    }

    let mut carry = seq.pop()?;
    for i in (pos..border).rev() {
        carry = seq.set_at(i, carry);
    }

    Some(carry)
}

/// Element types [`concat`] can join.
pub trait ConcatValue {
    /// The text to join, `None` if the value has no string form.
    fn concat_str(&self) -> Option<Cow<'_, str>>;
}

impl ConcatValue for str {
    fn concat_str(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ConcatValue for String {
    fn concat_str(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: ConcatValue + ?Sized> ConcatValue for &T {
    fn concat_str(&self) -> Option<Cow<'_, str>> {
        (**self).concat_str()
    }
}

impl<T: ConcatValue + ?Sized> ConcatValue for Box<T> {
    fn concat_str(&self) -> Option<Cow<'_, str>> {
        (**self).concat_str()
    }
}

impl<T: ConcatValue> ConcatValue for Option<T> {
    fn concat_str(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(ConcatValue::concat_str)
    }
}

macro_rules! concat_value_num_impl {
    ($($t:ty),*) => {
        $(
            impl ConcatValue for $t {
                fn concat_str(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

concat_value_num_impl!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Joins the elements at `range` with `sep` in between.
///
/// An empty range yields an empty string. Fails on the first element without a string form.
pub fn concat<S>(seq: &S, sep: &str, range: RangeInclusive<usize>) -> Result<String, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: ConcatValue,
{
    let (low, high) = range.into_inner();
    if high < low {
        return Ok(String::new());
    }

    let border = seq.border();
    if low == 0 || high > border {
        return Err(SequenceError::InvalidRange { low, high, border });
    }

    let mut joined = String::new();
    for index in low..=high {
        let part = seq
            .get_at(index)
            .concat_str()
            .ok_or(SequenceError::NotAString { index })?;

        joined.push_str(&part);
        if index != high {
            joined.push_str(sep);
        }
    }

    Ok(joined)
}

/// [`concat`] over `1..=border`.
pub fn concat_all<S>(seq: &S, sep: &str) -> Result<String, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: ConcatValue,
{
    concat(seq, sep, 1..=seq.border())
}

/// Visits `(position, element)` for `1..=border` in order until `visit` returns `Some`.
pub fn for_each_indexed<S, R>(seq: &S, mut visit: impl FnMut(usize, &S::Item) -> Option<R>) -> Option<R>
where
    S: Sequence + ?Sized,
{
    (1..=seq.border()).find_map(|index| visit(index, seq.get_at(index)))
}

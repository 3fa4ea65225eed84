//! The narrow accessor every operation in this crate works through.
//!
//! Positions are 1-based and run up to the sequence's border, the last populated index. A border
//! of zero is an empty sequence.

use std::collections::VecDeque;
use std::mem;

/// Positional access to a dense run of elements `1..=border()`.
///
/// Out of range positions are a caller bug and may panic, the sort engine only ever passes
/// positions inside the range it validated against [`Sequence::border`]. The `_at` suffix keeps
/// the 1-based methods apart from the 0-based `get`/`swap` of slices, `Vec` and `VecDeque`.
pub trait Sequence {
    type Item;

    /// The last populated position.
    fn border(&self) -> usize;

    fn get_at(&self, index: usize) -> &Self::Item;

    /// Overwrites the element at `index` and hands back the previous one.
    fn set_at(&mut self, index: usize, value: Self::Item) -> Self::Item;

    fn swap_at(&mut self, a: usize, b: usize);
}

/// A [`Sequence`] that can grow and shrink at its border.
pub trait GrowableSequence: Sequence {
    /// Stores `value` at `border() + 1`.
    fn push(&mut self, value: Self::Item);

    /// Takes the element at `border()` out of the sequence.
    fn pop(&mut self) -> Option<Self::Item>;
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn border(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get_at(&self, index: usize) -> &T {
        &self[index - 1]
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) -> T {
        mem::replace(&mut self[index - 1], value)
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a - 1, b - 1);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn border(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get_at(&self, index: usize) -> &T {
        self.as_slice().get_at(index)
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) -> T {
        self.as_mut_slice().set_at(index, value)
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap_at(a, b);
    }
}

impl<T> GrowableSequence for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn border(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get_at(&self, index: usize) -> &T {
        &self[index - 1]
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) -> T {
        mem::replace(&mut self[index - 1], value)
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a - 1, b - 1);
    }
}

impl<T> GrowableSequence for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }
}

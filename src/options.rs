use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Incomparable, SortError, UnknownAlgorithm};
use crate::observe::{Observer, Probe};
use crate::order::natural_less;
use crate::sequence::Sequence;
use crate::unstable::{median_sort, partition_sort};

/// The two interchangeable sort strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Recursive quicksort, Lomuto partition around the last element. Linear stack depth in the
    /// worst case, e.g. already sorted input.
    #[default]
    Partition,
    /// Quicksort with median-of-three pivots that only recurses into the smaller side, so stack
    /// depth stays logarithmic. Detects comparison functions that are not a strict weak order.
    Median,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Partition, Algorithm::Median];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Partition => "partition",
            Algorithm::Median => "median",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// One configured sort call: which algorithm, over which positions, reporting to whom.
///
/// Without an explicit range the whole sequence `1..=border` is sorted. An empty range, such as
/// `1..=0`, is accepted and leaves the sequence untouched.
pub struct SortOptions<'a> {
    algorithm: Algorithm,
    range: Option<RangeInclusive<usize>>,
    observer: Option<Observer<'a>>,
}

impl<'a> SortOptions<'a> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            range: None,
            observer: None,
        }
    }

    /// Restricts the sort to the 1-based inclusive `range`.
    pub fn range(mut self, range: RangeInclusive<usize>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn observer(mut self, observer: Observer<'a>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sorts in the natural order of the elements.
    pub fn sort<S>(self, seq: &mut S) -> Result<(), SortError<Incomparable>>
    where
        S: Sequence + ?Sized,
        S::Item: PartialOrd,
    {
        self.sort_by(seq, natural_less)
    }

    pub fn sort_by<S, F, E>(self, seq: &mut S, mut is_less: F) -> Result<(), SortError<E>>
    where
        S: Sequence + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> Result<bool, E>,
    {
        let border = seq.border();
        let (low, high) = match self.range {
            Some(range) => range.into_inner(),
            None => (1, border),
        };

        let span = tracing::trace_span!("sort", algorithm = %self.algorithm, low, high, border);
        let _enter = span.enter();

        if high < low {
            return Ok(());
        }

        if low == 0 || high > border {
            tracing::debug!(low, high, border, "rejected sort range");
            return Err(SortError::InvalidRange { low, high, border });
        }

        let mut probe = Probe::new(self.observer);

        match self.algorithm {
            Algorithm::Partition => {
                partition_sort::sort_range(seq, low, high, &mut is_less, &mut probe)
            }
            Algorithm::Median => median_sort::sort_range(seq, low, high, &mut is_less, &mut probe),
        }
    }
}

impl Default for SortOptions<'_> {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

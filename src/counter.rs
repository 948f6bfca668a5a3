//! Operation counters shared by every engine.

use serde::{Deserialize, Serialize};

/// Comparison, assignment and peak auxiliary memory counts for one sort call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Value comparisons, including loop guards that read an element
    pub comparisons: u64,
    /// Writes to array slots; a swap counts as three
    pub assignments: u64,
    /// Byte size of the largest auxiliary buffer allocated (high-water mark)
    pub memory_bytes: u64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            comparisons: 0,
            assignments: 0,
            memory_bytes: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold `other` into `self`: operation counts add, memory keeps the peak.
    pub fn merge(&mut self, other: &Counter) {
        self.comparisons += other.comparisons;
        self.assignments += other.assignments;
        self.memory_bytes = self.memory_bytes.max(other.memory_bytes);
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::new()
    }
}

/// Instrumented comparator threaded through every engine.
///
/// All element comparisons go through [`Tally::less`] and all slot writes are
/// reported through [`Tally::assign`]/[`Tally::swap`], so the accounting rules
/// live in one place.
pub(crate) struct Tally<F> {
    counter: Counter,
    is_less: F,
}

impl<F> Tally<F> {
    pub(crate) fn new(is_less: F) -> Self {
        Self {
            counter: Counter::new(),
            is_less,
        }
    }

    #[inline]
    pub(crate) fn less<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.counter.comparisons += 1;
        (self.is_less)(a, b)
    }

    /// Charge a comparison against an empty or padding slot; the outcome is
    /// known without calling the comparator.
    #[inline]
    pub(crate) fn sentinel(&mut self) {
        self.counter.comparisons += 1;
    }

    #[inline]
    pub(crate) fn assign(&mut self, writes: u64) {
        self.counter.assignments += writes;
    }

    /// Exchange two slots, charged as the three-assignment idiom.
    #[inline]
    pub(crate) fn swap<T>(&mut self, data: &mut [T], a: usize, b: usize) {
        data.swap(a, b);
        self.counter.assignments += 3;
    }

    /// Record an auxiliary allocation of `len` values of `T`.
    pub(crate) fn allocated<T>(&mut self, len: usize) {
        let bytes = (len * std::mem::size_of::<T>()) as u64;
        self.counter.memory_bytes = self.counter.memory_bytes.max(bytes);
    }

    pub(crate) fn finish(self) -> Counter {
        self.counter
    }
}

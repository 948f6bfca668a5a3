//! Library Sort (gapped insertion sort).
//!
//! Elements are inserted one at a time into a working array that keeps empty
//! slots between them, so an insertion usually shifts only as far as the next
//! gap. Slots are `Option<T>`: emptiness is out of band, so every value of
//! `T`, negatives included, is a legal element.
//!
//! The working array is rebalanced once it is half full. With the default
//! ε = 1.0 it starts at `2n` slots, so that point is never reached: random
//! input packs into a dense prefix and pays quadratic shifting, while sorted
//! input appends at the right and stays linear. Smaller gap factors trigger
//! rebalancing and spread the elements out again.

use crate::counter::{Counter, Tally};
use crate::error::{Error, Result};
use crate::Sorter;

/// Gap factor ε from Bender, Farach-Colton and Mosteiro
pub const DEFAULT_GAP_FACTOR: f64 = 1.0;
/// Largest accepted gap factor; the working array grows linearly with ε
pub const MAX_GAP_FACTOR: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LibrarySort {
    gap_factor: f64,
}

impl Default for LibrarySort {
    fn default() -> Self {
        Self {
            gap_factor: DEFAULT_GAP_FACTOR,
        }
    }
}

impl LibrarySort {
    /// Library Sort with a custom gap factor ε; the working array holds
    /// `ceil(n * (1 + ε))` slots. ε must lie in `(0, MAX_GAP_FACTOR]`.
    pub fn with_gap_factor(gap_factor: f64) -> Result<Self> {
        if !(gap_factor > 0.0 && gap_factor <= MAX_GAP_FACTOR) {
            return Err(Error::InvalidGapFactor(gap_factor));
        }
        Ok(Self { gap_factor })
    }

    pub fn gap_factor(&self) -> f64 {
        self.gap_factor
    }
}

impl Sorter for LibrarySort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        let n = data.len();
        if n <= 1 {
            return tally.finish();
        }

        let capacity = (n as f64 * (1.0 + self.gap_factor)).ceil() as usize;
        let mut shelf = Shelf::new(capacity.max(n + 1), &mut tally);
        shelf.put(0, data[0].clone(), &mut tally);

        for item in &data[1..] {
            if shelf.len >= shelf.capacity() / 2 {
                shelf.rebalance(self.gap_factor, &mut tally);
            }
            shelf.insert(item.clone(), &mut tally);
        }

        shelf.compact_into(data, &mut tally);
        tally.finish()
    }
}

/// The gapped working array. Occupied slots read left to right are always
/// in ascending order.
struct Shelf<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T: Clone> Shelf<T> {
    fn new<F>(capacity: usize, tally: &mut Tally<F>) -> Self {
        tally.allocated::<Option<T>>(capacity);
        Self {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn put<F>(&mut self, idx: usize, value: T, tally: &mut Tally<F>) {
        self.slots[idx] = Some(value);
        self.len += 1;
        tally.assign(1);
    }

    /// Spread the elements over `ceil(len * 2 * (1 + ε))` slots at a uniform
    /// stride.
    fn rebalance<F>(&mut self, gap_factor: f64, tally: &mut Tally<F>) {
        let elements: Vec<T> = self.slots.iter_mut().filter_map(Option::take).collect();
        tally.allocated::<T>(elements.len());
        tally.assign(elements.len() as u64);

        let capacity = (elements.len() as f64 * 2.0 * (1.0 + gap_factor)).ceil() as usize;
        let stride = capacity / elements.len();
        self.slots = vec![None; capacity];
        tally.allocated::<Option<T>>(capacity);

        for (i, value) in elements.into_iter().enumerate() {
            self.slots[i * stride] = Some(value);
            tally.assign(1);
        }
    }

    /// First slot index such that every occupied slot before it holds a value
    /// `<= key` and every occupied slot from it on holds a value `> key`.
    ///
    /// Inserting there places `key` after its equals, which keeps the sort
    /// stable.
    fn upper_bound<F>(&self, key: &T, tally: &mut Tally<F>) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (mut lo, mut hi) = (0, self.capacity());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            // Nearest occupied slot at or after mid inside the window
            let probe = (mid..hi).find_map(|i| self.slots[i].as_ref().map(|v| (i, v)));
            match probe {
                None => hi = mid,
                Some((idx, value)) => {
                    if tally.less(key, value) {
                        hi = mid;
                    } else {
                        lo = idx + 1;
                    }
                }
            }
        }
        lo
    }

    fn insert<F>(&mut self, key: T, tally: &mut Tally<F>)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let pos = self.upper_bound(&key, tally);
        let capacity = self.capacity();

        if pos < capacity && self.slots[pos].is_none() {
            self.put(pos, key, tally);
        } else if let Some(gap) = (pos..capacity).find(|&i| self.slots[i].is_none()) {
            // Shift [pos, gap) one slot right into the gap
            self.slots[pos..=gap].rotate_right(1);
            tally.assign((gap - pos) as u64);
            self.put(pos, key, tally);
        } else if let Some(gap) = (0..pos).rev().find(|&i| self.slots[i].is_none()) {
            // No room to the right: shift (gap, pos) one slot left instead
            self.slots[gap..pos].rotate_left(1);
            tally.assign((pos - 1 - gap) as u64);
            self.put(pos - 1, key, tally);
        } else {
            unreachable!("gapped array is full: {} of {} slots", self.len, capacity);
        }
    }

    fn compact_into<F>(self, data: &mut [T], tally: &mut Tally<F>) {
        for (slot, value) in data.iter_mut().zip(self.slots.into_iter().flatten()) {
            *slot = value;
            tally.assign(1);
        }
    }
}

//! Comb Sort: bubble sort over a shrinking gap.

use crate::counter::{Counter, Tally};
use crate::Sorter;

/// Gap divisor between passes
pub const SHRINK_FACTOR: f64 = 1.3;

pub struct CombSort;

impl Sorter for CombSort {
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

        let mut gap = n;
        let mut swapped = true;
        // Only a gap-1 pass without swaps proves the slice sorted
        while gap > 1 || swapped {
            gap = next_gap(gap);
            swapped = false;
            for i in 0..n - gap {
                if tally.less(&data[i + gap], &data[i]) {
                    tally.swap(data, i, i + gap);
                    swapped = true;
                }
            }
        }
        tally.finish()
    }
}

pub fn next_gap(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR) as usize).max(1)
}

//! Tim Sort, fixed-block variant.
//!
//! The input is cut into consecutive blocks of `min_run_length(n)` elements,
//! each block is insertion sorted, and blocks are merged bottom-up in
//! power-of-two widths. This is not the adaptive merge-stack Tim Sort:
//! natural runs are not detected by [`TimSort`]. [`find_run`] and
//! [`reverse_run`] are provided for callers that want to inspect natural runs.

use crate::baselines::insertion_sort;
use crate::counter::{Counter, Tally};
use crate::Sorter;

/// Inputs shorter than this form a single block
pub const MIN_MERGE: usize = 32;

pub struct TimSort;

impl Sorter for TimSort {
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

        let min_run = min_run_length(n);
        for block in data.chunks_mut(min_run) {
            insertion_sort(block, &mut tally);
        }

        let mut width = min_run;
        while width < n {
            let mut left = 0;
            while left < n {
                let mid = left + width;
                let right = (left + 2 * width).min(n);
                if mid < right {
                    merge(&mut data[left..right], mid - left, &mut tally);
                }
                left += 2 * width;
            }
            width *= 2;
        }
        tally.finish()
    }
}

/// Block length for `n` elements: `n` itself below [`MIN_MERGE`], otherwise a
/// value in `[MIN_MERGE / 2, MIN_MERGE]` chosen so `n / run` is close to a
/// power of two.
pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

/// Stable merge of `data[..mid]` and `data[mid..]` through two temporary runs.
fn merge<T, F>(data: &mut [T], mid: usize, tally: &mut Tally<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();
    tally.allocated::<T>(data.len());
    tally.assign(data.len() as u64);

    let (mut i, mut j) = (0, 0);
    for slot in data.iter_mut() {
        let take_left = if i < left.len() && j < right.len() {
            // left <= right keeps the left run first on ties
            !tally.less(&right[j], &left[i])
        } else {
            i < left.len()
        };

        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
        tally.assign(1);
    }
}

/// Find the natural run starting at `start` and return its exclusive end.
///
/// A strictly descending run is reversed in place so the returned range is
/// always ascending.
pub fn find_run<T, F>(data: &mut [T], start: usize, is_less: F) -> (usize, Counter)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut tally = Tally::new(is_less);
    let n = data.len();
    if start + 1 >= n {
        return (n.min(start + 1), tally.finish());
    }

    let mut end = start + 1;
    if tally.less(&data[end], &data[start]) {
        while end + 1 < n && tally.less(&data[end + 1], &data[end]) {
            end += 1;
        }
        reverse_range(data, start, end, &mut tally);
    } else {
        while end + 1 < n && !tally.less(&data[end + 1], &data[end]) {
            end += 1;
        }
    }
    (end + 1, tally.finish())
}

/// Reverse `data` in place, charging three assignments per exchange.
pub fn reverse_run<T>(data: &mut [T]) -> Counter {
    let mut tally = Tally::new(());
    if !data.is_empty() {
        reverse_range(data, 0, data.len() - 1, &mut tally);
    }
    tally.finish()
}

fn reverse_range<T, F>(data: &mut [T], mut lo: usize, mut hi: usize, tally: &mut Tally<F>) {
    while lo < hi {
        tally.swap(data, lo, hi);
        lo += 1;
        hi -= 1;
    }
}

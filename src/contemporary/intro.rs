//! Introsort: quicksort that bails out to heap sort when recursion gets deep
//! and finishes small ranges with insertion sort.

use crate::baselines::{heap_sort, insertion_sort};
use crate::counter::{Counter, Tally};
use crate::Sorter;

/// Ranges shorter than this are insertion sorted
pub const INSERTION_THRESHOLD: usize = 16;

pub struct IntroSort;

impl Sorter for IntroSort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        if data.len() <= 1 {
            return tally.finish();
        }

        introsort(data, depth_limit(data.len()), &mut tally);
        tally.finish()
    }
}

/// Quicksort recursion budget: `2 * floor(log2(len))`.
pub fn depth_limit(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    2 * len.ilog2() as usize
}

fn introsort<T, F>(data: &mut [T], depth_limit: usize, tally: &mut Tally<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < INSERTION_THRESHOLD {
        insertion_sort(data, tally);
        return;
    }

    if depth_limit == 0 {
        heap_sort(data, tally);
        return;
    }

    let pivot_idx = partition(data, tally);
    let (left, right) = data.split_at_mut(pivot_idx);
    introsort(left, depth_limit - 1, tally);
    introsort(&mut right[1..], depth_limit - 1, tally);
}

/// Lomuto partition around the median of first, middle and last.
fn partition<T, F>(data: &mut [T], tally: &mut Tally<F>) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let end = data.len() - 1;
    let mid = end / 2;
    let pivot_idx = median_of_three(data, 0, mid, end, tally);

    // Park the pivot at the end; it stays there until the final swap.
    tally.swap(data, pivot_idx, end);

    let mut i = 0;
    for j in 0..end {
        // data[j] <= pivot
        if !tally.less(&data[end], &data[j]) {
            tally.swap(data, i, j);
            i += 1;
        }
    }
    tally.swap(data, i, end);
    i
}

/// Index of the median value among `a`, `b`, `c`.
///
/// Walks the six orderings explicitly; equal values resolve deterministically
/// through the strict comparisons.
pub(crate) fn median_of_three<T, F>(
    data: &[T],
    a: usize,
    b: usize,
    c: usize,
    tally: &mut Tally<F>,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if tally.less(&data[a], &data[b]) {
        if tally.less(&data[b], &data[c]) {
            b // a < b < c
        } else if tally.less(&data[a], &data[c]) {
            c // a < c <= b
        } else {
            a // c <= a < b
        }
    } else if tally.less(&data[a], &data[c]) {
        a // b <= a < c
    } else if tally.less(&data[b], &data[c]) {
        c // b < c <= a
    } else {
        b // c <= b <= a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn median(values: [i32; 3]) -> (usize, u64) {
        let mut tally = Tally::new(|a: &i32, b: &i32| a < b);
        let idx = median_of_three(&values, 0, 1, 2, &mut tally);
        (idx, tally.finish().comparisons)
    }

    #[test]
    fn median_of_three_covers_all_orderings() {
        assert_eq!(median([1, 2, 3]).0, 1);
        assert_eq!(median([1, 3, 2]).0, 2);
        assert_eq!(median([2, 3, 1]).0, 0);
        assert_eq!(median([2, 1, 3]).0, 0);
        assert_eq!(median([3, 1, 2]).0, 2);
        assert_eq!(median([3, 2, 1]).0, 1);
        assert_eq!(median([5, 5, 5]).0, 1);
    }

    #[test]
    fn median_of_three_counts_evaluated_comparisons() {
        assert_eq!(median([1, 2, 3]).1, 2);
        assert_eq!(median([1, 3, 2]).1, 3);
        assert_eq!(median([2, 1, 3]).1, 2);
    }

    #[test]
    fn depth_limit_is_twice_floor_log2() {
        assert_eq!(depth_limit(1), 0);
        assert_eq!(depth_limit(2), 2);
        assert_eq!(depth_limit(16), 8);
        assert_eq!(depth_limit(17), 8);
        assert_eq!(depth_limit(1_000_000), 38);
    }

    #[test]
    fn small_input_is_pure_insertion_sort() {
        let mut data = vec![3, 1, 2];
        let counter = IntroSort.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(counter.comparisons, 3);
        assert_eq!(counter.assignments, 6);
    }

    #[test]
    fn all_equal_input_falls_back_to_heap_sort() {
        // Every element lands left of the pivot, so partitions degrade to
        // n-1 / 0 until the depth budget runs out.
        let n = 4096;
        let mut data = vec![9; n];
        let counter = IntroSort.sort(&mut data);
        assert!(data.iter().all(|&v| v == 9));
        let bound = (n as u64) * 64;
        assert!(counter.comparisons < bound, "{} comparisons", counter.comparisons);
    }

    #[test]
    fn random_input_sorts() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        let mut data: Vec<i32> = (0..10_000).map(|_| rng.gen_range(-1000..1000)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        IntroSort.sort(&mut data);
        assert_eq!(data, expected);
    }
}

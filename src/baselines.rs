//! Conventional textbook sorts, kept as comparison points.
//!
//! `insertion_sort` and `heap_sort` are also the sub-routines Introsort and
//! Tim Sort fall back to, so their accounting is shared.

use crate::counter::{Counter, Tally};
use crate::Sorter;

/// Bubble sort with early exit after a pass without swaps
pub struct BubbleSort;

impl Sorter for BubbleSort {
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

        for i in 0..n - 1 {
            let mut swapped = false;
            // Last i elements are already in place
            for j in 0..n - 1 - i {
                if tally.less(&data[j + 1], &data[j]) {
                    tally.swap(data, j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        tally.finish()
    }
}

/// Straight insertion sort
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        insertion_sort(data, &mut tally);
        tally.finish()
    }
}

/// Selection sort - O(n²) comparisons regardless of input
pub struct SelectionSort;

impl Sorter for SelectionSort {
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

        for i in 0..n - 1 {
            let mut min_idx = i;
            for j in i + 1..n {
                if tally.less(&data[j], &data[min_idx]) {
                    min_idx = j;
                }
            }
            if min_idx != i {
                tally.swap(data, i, min_idx);
            }
        }
        tally.finish()
    }
}

/// Quicksort with the last element as pivot (Lomuto partition)
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        quicksort(data, &mut tally);
        tally.finish()
    }
}

// Recurse into the smaller side and loop on the larger one so the stack stays
// O(log n) deep even on already sorted input.
fn quicksort<T, F>(mut data: &mut [T], tally: &mut Tally<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    while data.len() > 1 {
        let pivot_idx = partition(data, tally);
        let (left, right) = data.split_at_mut(pivot_idx);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, tally);
            data = right;
        } else {
            quicksort(right, tally);
            data = left;
        }
    }
}

#[inline]
fn partition<T, F>(data: &mut [T], tally: &mut Tally<F>) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let high = data.len() - 1;
    let pivot = data[high].clone();
    tally.assign(1);

    let mut i = 0;
    for j in 0..high {
        // data[j] <= pivot
        if !tally.less(&pivot, &data[j]) {
            tally.swap(data, i, j);
            i += 1;
        }
    }
    tally.swap(data, i, high);
    i
}

/// Top-down merge sort with a single auxiliary buffer
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        if data.len() <= 1 {
            return tally.finish();
        }

        let mut buffer = data.to_vec();
        tally.allocated::<T>(buffer.len());
        merge_sort(data, &mut buffer, &mut tally);
        tally.finish()
    }
}

fn merge_sort<T, F>(data: &mut [T], buffer: &mut [T], tally: &mut Tally<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    let mid = (len - 1) / 2 + 1;
    merge_sort(&mut data[..mid], &mut buffer[..mid], tally);
    merge_sort(&mut data[mid..], &mut buffer[mid..], tally);
    merge_through_buffer(data, buffer, mid, tally);
}

fn merge_through_buffer<T, F>(data: &mut [T], buffer: &mut [T], mid: usize, tally: &mut Tally<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    buffer[..len].clone_from_slice(data);
    tally.assign(len as u64);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        // Ties take the left run
        if tally.less(&buffer[j], &buffer[i]) {
            data[k] = buffer[j].clone();
            j += 1;
        } else {
            data[k] = buffer[i].clone();
            i += 1;
        }
        tally.assign(1);
        k += 1;
    }
    for src in buffer[i..mid].iter().chain(&buffer[j..len]) {
        data[k] = src.clone();
        tally.assign(1);
        k += 1;
    }
}

/// Heap sort - O(n log n) worst case, in-place
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        heap_sort(data, &mut tally);
        tally.finish()
    }
}

/// Insertion sort on `data`, charging one assignment for the key load, one per
/// shift and one for the key store.
pub(crate) fn insertion_sort<T, F>(data: &mut [T], tally: &mut Tally<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let key = data[i].clone();
        tally.assign(1);

        let mut j = i;
        while j > 0 {
            if tally.less(&key, &data[j - 1]) {
                data[j] = data[j - 1].clone();
                tally.assign(1);
                j -= 1;
            } else {
                break;
            }
        }

        data[j] = key;
        tally.assign(1);
    }
}

pub(crate) fn heap_sort<T, F>(data: &mut [T], tally: &mut Tally<F>)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    // Build max heap
    for i in (0..n / 2).rev() {
        sift_down(data, n, i, tally);
    }

    // Extract elements from heap
    for end in (1..n).rev() {
        tally.swap(data, 0, end);
        sift_down(data, end, 0, tally);
    }
}

#[inline]
fn sift_down<T, F>(data: &mut [T], n: usize, mut root: usize, tally: &mut Tally<F>)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < n && tally.less(&data[largest], &data[left]) {
            largest = left;
        }
        if right < n && tally.less(&data[largest], &data[right]) {
            largest = right;
        }

        if largest == root {
            break;
        }
        tally.swap(data, root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_sort_counts_key_loads_shifts_and_stores() {
        let mut data = vec![3, 1, 2];
        let counter = InsertionSort.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(counter.comparisons, 3);
        // two key loads, two shifts, two key stores
        assert_eq!(counter.assignments, 6);
        assert_eq!(counter.memory_bytes, 0);
    }

    #[test]
    fn bubble_sort_stops_after_clean_pass() {
        let mut data: Vec<i32> = (0..50).collect();
        let counter = BubbleSort.sort(&mut data);
        assert_eq!(counter.comparisons, 49);
        assert_eq!(counter.assignments, 0);
    }

    #[test]
    fn selection_sort_always_does_quadratic_comparisons() {
        let mut data: Vec<i32> = (0..20).collect();
        let counter = SelectionSort.sort(&mut data);
        assert_eq!(counter.comparisons, 20 * 19 / 2);
        assert_eq!(counter.assignments, 0);
    }

    #[test]
    fn quicksort_survives_large_sorted_input() {
        // Sorted input drives a last-element pivot to its worst case; the
        // loop-on-larger-side structure keeps the stack shallow.
        let mut data: Vec<i32> = (0..5_000).collect();
        let counter = QuickSort.sort(&mut data);
        assert!(crate::is_sorted(&data));
        assert_eq!(counter.comparisons, 5_000 * 4_999 / 2);
    }

    #[test]
    fn merge_sort_reports_one_buffer_of_input_size() {
        let mut data = vec![5, -4, 3, -2, 1];
        let counter = MergeSort.sort(&mut data);
        assert_eq!(data, vec![-4, -2, 1, 3, 5]);
        assert_eq!(counter.memory_bytes, 5 * 4);
    }

    #[test]
    fn heap_sort_handles_duplicates() {
        let mut data = vec![2, 9, 2, 9, 2, 0, 0];
        HeapSort.sort(&mut data);
        assert_eq!(data, vec![0, 0, 2, 2, 2, 9, 9]);
    }

    #[test]
    fn stable_baselines_keep_equal_keys_in_order() {
        let records: Vec<(i32, usize)> = [4, 1, 4, 2, 1, 4, 3, 2]
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();
        let mut expected = records.clone();
        expected.sort_by_key(|r| r.0);

        let mut bubble = records.clone();
        BubbleSort.sort_by_key(&mut bubble, |r| r.0);
        assert_eq!(bubble, expected);

        let mut insertion = records.clone();
        InsertionSort.sort_by_key(&mut insertion, |r| r.0);
        assert_eq!(insertion, expected);

        let mut merge = records;
        MergeSort.sort_by_key(&mut merge, |r| r.0);
        assert_eq!(merge, expected);
    }
}

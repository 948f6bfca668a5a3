//! Instrumented Sorting Engines
//!
//! Comparison sorts that report how much work they did: comparisons,
//! assignments and the peak auxiliary memory they allocated. The six
//! contemporary hybrids live in [`contemporary`], the six textbook
//! comparison points in [`baselines`].

pub mod algorithm;
pub mod baselines;
pub mod contemporary;
pub mod counter;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod report;
pub mod stability;

pub use algorithm::{AlgorithmInfo, AlgorithmKind, Complexity, Family};
pub use counter::Counter;
pub use error::{Error, Result};

/// Trait for instrumented sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order under `is_less`.
    ///
    /// `is_less` must be a strict weak ordering. Every call to it made by the
    /// engine is counted as one comparison in the returned [`Counter`].
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// Sort integers in-place in ascending order
    fn sort(&self, data: &mut [i32]) -> Counter {
        self.sort_by(data, |a, b| a < b)
    }

    /// Sort by an extracted key, used to check stability on tagged records
    fn sort_by_key<T, K, F>(&self, data: &mut [T], mut key: F) -> Counter
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(data, |a, b| key(a) < key(b))
    }
}

/// Whether `data` is in non-decreasing order
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn assert_sorts_like_std<S: Sorter>(sorter: &S, data: &[i32], label: &str) {
        let mut actual = data.to_vec();
        sorter.sort(&mut actual);

        let mut expected = data.to_vec();
        expected.sort_unstable();

        assert_eq!(actual, expected, "{} input_len={}", label, data.len());
    }

    fn test_sorter<S: Sorter>(sorter: &S, label: &str) {
        // Empty and single element are free
        let mut empty: Vec<i32> = vec![];
        assert!(sorter.sort(&mut empty).is_zero(), "{}", label);

        let mut single = vec![42];
        assert!(sorter.sort(&mut single).is_zero(), "{}", label);
        assert_eq!(single, vec![42]);

        // Two elements
        assert_sorts_like_std(sorter, &[5, 3], label);

        // Already sorted
        let sorted: Vec<i32> = (0..100).collect();
        assert_sorts_like_std(sorter, &sorted, label);

        // Reverse sorted
        let reverse: Vec<i32> = (0..100).rev().collect();
        assert_sorts_like_std(sorter, &reverse, label);

        // All same
        assert_sorts_like_std(sorter, &[7; 100], label);

        // Negatives and duplicates
        assert_sorts_like_std(sorter, &[0, -1, 3, -1, i32::MIN, i32::MAX, 3, -7, 0], label);

        // Random, several sizes around the engines' internal thresholds
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        for size in [15, 16, 17, 31, 32, 33, 64, 100, 1000] {
            let random: Vec<i32> = (0..size).map(|_| rng.gen_range(-500..500)).collect();
            assert_sorts_like_std(sorter, &random, label);
        }
    }

    #[test]
    fn test_every_algorithm() {
        for kind in AlgorithmKind::ALL {
            test_sorter(&kind, kind.name());
        }
    }

    #[test]
    fn test_sort_by_key_sorts_records() {
        let records = vec![(3, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        for kind in AlgorithmKind::ALL {
            let mut data = records.clone();
            kind.sort_by_key(&mut data, |r| r.0);
            let keys: Vec<i32> = data.iter().map(|r| r.0).collect();
            assert_eq!(keys, vec![1, 1, 2, 3], "{}", kind.name());
        }
    }

    #[test]
    fn test_sorted_input_costs_no_more_than_random() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let random: Vec<i32> = (0..512).map(|_| rng.gen_range(0..10_000)).collect();
        let mut sorted = random.clone();
        sorted.sort_unstable();

        for kind in AlgorithmKind::ALL {
            let mut first = random.clone();
            let random_cost = kind.sort(&mut first);
            assert_eq!(first, sorted);

            let mut again = first.clone();
            let sorted_cost = kind.sort(&mut again);
            assert_eq!(again, first, "{}", kind.name());

            // Sorted input is the worst case for a last-element pivot and
            // for the max-heap build.
            if matches!(kind, AlgorithmKind::Quick | AlgorithmKind::Heap) {
                continue;
            }
            assert!(
                sorted_cost.comparisons <= random_cost.comparisons,
                "{}: sorted {} > random {}",
                kind.name(),
                sorted_cost.comparisons,
                random_cost.comparisons
            );
        }
    }
}

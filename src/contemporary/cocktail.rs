//! Cocktail Sort (bidirectional bubble sort).

use crate::counter::{Counter, Tally};
use crate::Sorter;

pub struct CocktailSort;

impl Sorter for CocktailSort {
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

        let (mut start, mut end) = (0, n - 1);
        let mut swapped = true;
        while swapped {
            swapped = bubble(data, start..end, &mut tally);
            if !swapped {
                break;
            }
            // Largest remaining value is now at `end`
            end -= 1;

            swapped = bubble(data, (start..end).rev(), &mut tally);
            start += 1;
        }
        tally.finish()
    }
}

/// One bubble pass over adjacent pairs `(i, i + 1)` in the order `indices`
/// yields. Returns whether anything moved.
fn bubble<T, F, I>(data: &mut [T], indices: I, tally: &mut Tally<F>) -> bool
where
    F: FnMut(&T, &T) -> bool,
    I: Iterator<Item = usize>,
{
    let mut swapped = false;
    for i in indices {
        if tally.less(&data[i + 1], &data[i]) {
            tally.swap(data, i, i + 1);
            swapped = true;
        }
    }
    swapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_is_one_forward_pass() {
        let mut data: Vec<i32> = (0..30).collect();
        let counter = CocktailSort.sort(&mut data);
        assert_eq!(counter.comparisons, 29);
        assert_eq!(counter.assignments, 0);
    }

    #[test]
    fn small_value_at_the_end_moves_in_one_backward_pass() {
        let mut data = vec![1, 2, 3, 4, 0];
        let counter = CocktailSort.sort(&mut data);
        assert_eq!(data, vec![0, 1, 2, 3, 4]);
        // forward 4 (1 swap), backward 3 (3 swaps), forward 2 (clean)
        assert_eq!(counter.comparisons, 4 + 3 + 2);
        assert_eq!(counter.assignments, 4 * 3);
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let mut records = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        CocktailSort.sort_by_key(&mut records, |r| r.0);
        assert_eq!(records, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }
}

//! Tournament Sort over an array-backed winner tree.
//!
//! Leaves hold the input in order, padded to a power of two with empty nodes.
//! Every internal node holds a copy of the smaller of its two children, so the
//! root is always the current minimum. Each extraction empties the winning
//! leaf and replays only the matches on its path to the root.

use crate::counter::{Counter, Tally};
use crate::Sorter;

pub struct TournamentSort;

impl Sorter for TournamentSort {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut tally = Tally::new(is_less);
        if data.len() <= 1 {
            return tally.finish();
        }

        let mut tree = WinnerTree::build(data, &mut tally);
        let mut sorted = Vec::with_capacity(data.len());
        tally.allocated::<T>(data.len());
        while let Some((value, _)) = tree.pop(&mut tally) {
            sorted.push(value);
            tally.assign(1);
        }

        for (slot, value) in data.iter_mut().zip(sorted) {
            *slot = value;
            tally.assign(1);
        }
        tally.finish()
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    /// `None` once the leaf has been extracted, and for padding leaves
    value: Option<T>,
    /// Input position the value came from
    leaf: usize,
}

/// Complete binary tree in heap layout: children of `i` are `2i + 1` and
/// `2i + 2`, leaves start at `2^height - 1`.
pub(crate) struct WinnerTree<T> {
    nodes: Vec<Node<T>>,
    height: u32,
}

impl<T: Clone> WinnerTree<T> {
    pub(crate) fn build<F>(data: &[T], tally: &mut Tally<F>) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let height = data.len().next_power_of_two().trailing_zeros();
        let size = (1usize << (height + 1)) - 1;
        let leaf_start = (1usize << height) - 1;
        tally.allocated::<Node<T>>(size);

        let mut nodes = vec![
            Node {
                value: None,
                leaf: 0,
            };
            size
        ];
        for (i, node) in nodes[leaf_start..].iter_mut().enumerate() {
            node.leaf = i;
            node.value = data.get(i).cloned();
            tally.assign(1);
        }

        let mut tree = Self { nodes, height };
        for parent in (0..leaf_start).rev() {
            tree.replay(parent, tally);
        }
        tree
    }

    #[cfg(test)]
    fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn leaf_start(&self) -> usize {
        (1 << self.height) - 1
    }

    /// Take the current minimum and the input position it came from.
    pub(crate) fn pop<F>(&mut self, tally: &mut Tally<F>) -> Option<(T, usize)>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let root = &self.nodes[0];
        let value = root.value.clone()?;
        let leaf = root.leaf;

        let mut idx = self.leaf_start() + leaf;
        self.nodes[idx].value = None;
        tally.assign(1);

        while idx > 0 {
            idx = (idx - 1) / 2;
            self.replay(idx, tally);
        }
        Some((value, leaf))
    }

    /// Recompute `parent` as the winner of its two children. Ties go to the
    /// left child.
    fn replay<F>(&mut self, parent: usize, tally: &mut Tally<F>)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (left, right) = (2 * parent + 1, 2 * parent + 2);
        let winner = match (&self.nodes[left].value, &self.nodes[right].value) {
            (Some(l), Some(r)) => {
                if tally.less(r, l) {
                    right
                } else {
                    left
                }
            }
            (None, Some(_)) => {
                tally.sentinel();
                right
            }
            (_, None) => {
                tally.sentinel();
                left
            }
        };
        self.nodes[parent] = self.nodes[winner].clone();
        tally.assign(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_leaves_make_a_seven_node_tree() {
        let data = [5, 3, 8, 1];
        let mut tally = Tally::new(|a: &i32, b: &i32| a < b);
        let mut tree = WinnerTree::build(&data, &mut tally);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.pop(&mut tally), Some((1, 3)));
        assert_eq!(tree.pop(&mut tally), Some((3, 1)));
        assert_eq!(tree.pop(&mut tally), Some((5, 0)));
        assert_eq!(tree.pop(&mut tally), Some((8, 2)));
        assert_eq!(tree.pop(&mut tally), None);

        let mut data = vec![5, 3, 8, 1];
        TournamentSort.sort(&mut data);
        assert_eq!(data, vec![1, 3, 5, 8]);
    }

    #[test]
    fn padding_leaves_never_win() {
        let data = [2, -7, 4, 0, 9];
        let mut tally = Tally::new(|a: &i32, b: &i32| a < b);
        let mut tree = WinnerTree::build(&data, &mut tally);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.node_count(), 15);

        let mut drained = Vec::new();
        while let Some((value, _)) = tree.pop(&mut tally) {
            drained.push(value);
        }
        assert_eq!(drained, vec![-7, 0, 2, 4, 9]);
    }

    #[test]
    fn each_extraction_replays_one_path() {
        // 8 leaves: 7 matches to build, then 3 per extraction
        let mut data = vec![7, 6, 5, 4, 3, 2, 1, 0];
        let counter = TournamentSort.sort(&mut data);
        assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(counter.comparisons, 7 + 8 * 3);
    }

    #[test]
    fn tree_is_the_largest_buffer() {
        let mut data = vec![3, 1, 2];
        let counter = TournamentSort.sort(&mut data);
        let node = std::mem::size_of::<Node<i32>>() as u64;
        assert_eq!(counter.memory_bytes, 7 * node);
    }
}

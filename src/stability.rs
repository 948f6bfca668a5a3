//! Measured stability: sort tagged records by key and check that records with
//! equal keys come out in their original order.

use std::collections::HashMap;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::algorithm::AlgorithmKind;
use crate::Sorter;

/// A key plus the position it was generated at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub key: i32,
    pub position: usize,
}

/// Theoretical vs measured stability for one engine
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StabilityOutcome {
    pub algorithm: AlgorithmKind,
    pub theoretical: bool,
    pub measured: bool,
}

impl StabilityOutcome {
    pub fn new(algorithm: AlgorithmKind, measured: bool) -> Self {
        Self {
            algorithm,
            theoretical: algorithm.is_stable(),
            measured,
        }
    }

    pub fn agrees(&self) -> bool {
        self.theoretical == self.measured
    }
}

/// `len` records with keys drawn uniformly from `1..=key_range`, so most keys
/// repeat.
pub fn records(len: usize, key_range: i32, seed: u64) -> Vec<Record> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..len)
        .map(|position| Record {
            key: rng.gen_range(1..=key_range.max(1)),
            position,
        })
        .collect()
}

/// True when, within every key, positions are strictly increasing.
pub fn preserves_order(sorted: &[Record]) -> bool {
    let mut last_seen: HashMap<i32, usize> = HashMap::new();
    for record in sorted {
        if let Some(prev) = last_seen.insert(record.key, record.position) {
            if record.position < prev {
                debug!(
                    "key {} out of order: position {} after {}",
                    record.key, record.position, prev
                );
                return false;
            }
        }
    }
    true
}

/// Sort fresh records with `sorter` and report whether equal keys kept their
/// order.
pub fn check<S: Sorter>(sorter: &S, len: usize, key_range: i32, seed: u64) -> bool {
    let mut data = records(len, key_range, seed);
    sorter.sort_by_key(&mut data, |r| r.key);
    debug_assert!(data.windows(2).all(|w| w[0].key <= w[1].key));
    preserves_order(&data)
}

pub fn measure(kind: AlgorithmKind, len: usize, key_range: i32, seed: u64) -> StabilityOutcome {
    StabilityOutcome::new(kind, check(&kind, len, key_range, seed))
}

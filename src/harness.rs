//! Timed, repeated runs of one engine over one dataset.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::Serialize;

use crate::algorithm::AlgorithmKind;
use crate::stability::{self, StabilityOutcome};
use crate::{is_sorted, Sorter};

#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Timed repetitions per (engine, dataset)
    pub iterations: u32,
    /// Record count for the measured stability check
    pub stability_size: usize,
    /// Stability keys are drawn from `1..=stability_key_range`
    pub stability_key_range: i32,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            stability_size: 1000,
            stability_key_range: 10,
            seed: 12345,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: AlgorithmKind,
    pub dataset: String,
    pub size: usize,
    pub avg_ms: f64,
    pub times_ms: Vec<f64>,
    pub comparisons: u64,
    pub assignments: u64,
    /// Input bytes plus the engine's peak auxiliary bytes
    pub memory_bytes: u64,
    pub sorted: bool,
    pub theoretical_stable: bool,
    pub measured_stable: bool,
}

impl BenchmarkResult {
    pub fn stability_agrees(&self) -> bool {
        self.theoretical_stable == self.measured_stable
    }
}

fn as_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Sort a fresh copy of `data` `config.iterations` times (at least once).
///
/// Counters and the sortedness check come from the first iteration; the
/// engines are deterministic so later iterations only add timing samples.
pub fn run_algorithm(
    kind: AlgorithmKind,
    dataset: &str,
    data: &[i32],
    config: &BenchConfig,
) -> BenchmarkResult {
    info!("{} on {} ({} values)", kind, dataset, data.len());

    let iterations = config.iterations.max(1);
    let mut times_ms = Vec::with_capacity(iterations as usize);
    let mut first = None;

    for iter in 0..iterations {
        let mut work = data.to_vec();
        let start = Instant::now();
        let counter = kind.sort(&mut work);
        let elapsed = as_ms(start.elapsed());
        debug!("{} iteration {}/{}: {:.3} ms", kind, iter + 1, iterations, elapsed);
        times_ms.push(elapsed);

        if first.is_none() {
            first = Some((counter, is_sorted(&work)));
        }
    }
    let (counter, sorted) = first.unwrap_or_default();
    if !sorted {
        warn!("{} left {} unsorted", kind, dataset);
    }

    let avg_ms = times_ms.iter().sum::<f64>() / times_ms.len() as f64;
    let stability = stability::measure(
        kind,
        config.stability_size,
        config.stability_key_range,
        config.seed,
    );
    warn_on_mismatch(&stability);

    let input_bytes = (data.len() * std::mem::size_of::<i32>()) as u64;
    let result = BenchmarkResult {
        algorithm: kind,
        dataset: dataset.to_string(),
        size: data.len(),
        avg_ms,
        times_ms,
        comparisons: counter.comparisons,
        assignments: counter.assignments,
        memory_bytes: input_bytes + counter.memory_bytes,
        sorted,
        theoretical_stable: stability.theoretical,
        measured_stable: stability.measured,
    };
    info!(
        "{} on {}: {:.2} ms avg, {} comparisons, {} assignments, {} bytes",
        kind, dataset, result.avg_ms, result.comparisons, result.assignments, result.memory_bytes
    );
    result
}

pub fn run_stability_only(kinds: &[AlgorithmKind], config: &BenchConfig) -> Vec<StabilityOutcome> {
    kinds
        .iter()
        .map(|&kind| {
            let outcome = stability::measure(
                kind,
                config.stability_size,
                config.stability_key_range,
                config.seed,
            );
            info!(
                "{}: measured {}, expected {}",
                kind,
                stability_word(outcome.measured),
                stability_word(outcome.theoretical)
            );
            warn_on_mismatch(&outcome);
            outcome
        })
        .collect()
}

fn warn_on_mismatch(outcome: &StabilityOutcome) {
    if !outcome.agrees() {
        warn!(
            "{}: theoretical stability ({}) differs from measured ({})",
            outcome.algorithm,
            stability_word(outcome.theoretical),
            stability_word(outcome.measured)
        );
    }
}

pub(crate) fn stability_word(stable: bool) -> &'static str {
    if stable {
        "Stable"
    } else {
        "Unstable"
    }
}

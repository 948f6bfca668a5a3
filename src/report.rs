//! Human-readable tables plus CSV and JSON export of benchmark results.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::algorithm::AlgorithmKind;
use crate::dataset::DatasetKind;
use crate::harness::{stability_word, BenchmarkResult};
use crate::stability::StabilityOutcome;

pub const CSV_HEADER: &str = "Algorithm,Dataset Type,Data Size,Average Execution Time(ms),\
Comparisons,Assignments,Memory Usage(bytes),Theoretical Stability,Measured Stability";

const MISMATCH: &str = " ⚠";

pub fn write_results_table<W: Write>(out: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    writeln!(
        out,
        "{:<20}{:<18}{:>10}{:>15}{:>15}{:>15}{:>15}  {:<12}{:<12}{:<10}",
        "Algorithm",
        "Dataset",
        "Size",
        "Avg Time(ms)",
        "Comparisons",
        "Assignments",
        "Memory(bytes)",
        "Theoretical",
        "Measured",
        "Sorted"
    )?;
    writeln!(out, "{}", "-".repeat(144))?;
    for r in results {
        writeln!(
            out,
            "{:<20}{:<18}{:>10}{:>15.2}{:>15}{:>15}{:>15}  {:<12}{:<12}{:<10}",
            r.algorithm.name(),
            r.dataset,
            r.size,
            r.avg_ms,
            r.comparisons,
            r.assignments,
            r.memory_bytes,
            stability_word(r.theoretical_stable),
            stability_word(r.measured_stable),
            if r.sorted { "Success" } else { "Failed" }
        )?;
    }
    Ok(())
}

/// Average time per dataset shape, one row per engine. With several sizes the
/// last result for a cell wins.
pub fn write_comparison_table<W: Write>(
    out: &mut W,
    results: &[BenchmarkResult],
) -> io::Result<()> {
    let mut cells: BTreeMap<AlgorithmKind, BTreeMap<&str, f64>> = BTreeMap::new();
    for r in results {
        cells
            .entry(r.algorithm)
            .or_default()
            .insert(r.dataset.as_str(), r.avg_ms);
    }

    write!(out, "{:<20}", "Algorithm")?;
    for kind in DatasetKind::ALL {
        write!(out, "{:>20}", kind.label())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(120))?;

    for (algorithm, by_dataset) in &cells {
        write!(out, "{:<20}", algorithm.name())?;
        for kind in DatasetKind::ALL {
            match by_dataset.get(kind.label()) {
                Some(ms) => write!(out, "{:>20.2}", ms)?,
                None => write!(out, "{:>20}", "N/A")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Theoretical complexity and stability of every engine, with the measured
/// stability alongside when `results` has it.
pub fn write_complexity_table<W: Write>(
    out: &mut W,
    results: &[BenchmarkResult],
) -> io::Result<()> {
    let measured: BTreeMap<AlgorithmKind, bool> = results
        .iter()
        .map(|r| (r.algorithm, r.measured_stable))
        .collect();

    writeln!(
        out,
        "{:<20}{:>15}{:>15}{:>15}{:>15}{:>15}",
        "Algorithm", "Best", "Average", "Worst", "Theoretical", "Measured"
    )?;
    writeln!(out, "{}", "-".repeat(95))?;

    for kind in AlgorithmKind::ALL {
        let info = kind.info();
        write!(
            out,
            "{:<20}{:>15}{:>15}{:>15}{:>15}",
            info.name,
            info.best,
            info.average,
            info.worst,
            stability_word(info.stable)
        )?;
        match measured.get(&kind) {
            Some(&m) => {
                write!(out, "{:>15}", stability_word(m))?;
                if m != info.stable {
                    write!(out, "{}", MISMATCH)?;
                }
            }
            None => write!(out, "{:>15}", "-")?,
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One outcome per engine, taken from benchmark results
pub fn outcomes_from_results(results: &[BenchmarkResult]) -> Vec<StabilityOutcome> {
    let by_kind: BTreeMap<AlgorithmKind, StabilityOutcome> = results
        .iter()
        .map(|r| {
            (
                r.algorithm,
                StabilityOutcome {
                    algorithm: r.algorithm,
                    theoretical: r.theoretical_stable,
                    measured: r.measured_stable,
                },
            )
        })
        .collect();
    by_kind.into_values().collect()
}

/// Percentage of outcomes whose measured stability matches theory, `None`
/// when there are no outcomes
pub fn match_rate(outcomes: &[StabilityOutcome]) -> Option<f64> {
    if outcomes.is_empty() {
        return None;
    }
    let matched = outcomes.iter().filter(|o| o.agrees()).count();
    Some(matched as f64 * 100.0 / outcomes.len() as f64)
}

pub fn write_stability_summary<W: Write>(
    out: &mut W,
    outcomes: &[StabilityOutcome],
) -> io::Result<()> {
    writeln!(
        out,
        "{:<20}{:>15}{:>15}{:>20}",
        "Algorithm", "Theoretical", "Measured", "Match"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for o in outcomes {
        let verdict = if o.agrees() {
            "Match".to_string()
        } else {
            format!("Mismatch{}", MISMATCH)
        };
        writeln!(
            out,
            "{:<20}{:>15}{:>15}{:>20}",
            o.algorithm.name(),
            stability_word(o.theoretical),
            stability_word(o.measured),
            verdict
        )?;
    }

    if let Some(rate) = match_rate(outcomes) {
        writeln!(out)?;
        writeln!(
            out,
            "Match rate between theoretical and measured stability: {:.2}%",
            rate
        )?;
    }
    Ok(())
}

/// Summary CSV, one row per (algorithm, dataset type, size) ordered by those
/// three columns.
pub fn write_csv<W: Write>(out: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    let rows: BTreeMap<(&str, &str, usize), &BenchmarkResult> = results
        .iter()
        .map(|r| ((r.algorithm.name(), r.dataset.as_str(), r.size), r))
        .collect();

    writeln!(out, "{}", CSV_HEADER)?;
    for ((algorithm, dataset, size), r) in rows {
        writeln!(
            out,
            "{},{},{},{:.2},{},{},{},{},{}",
            algorithm,
            dataset,
            size,
            r.avg_ms,
            r.comparisons,
            r.assignments,
            r.memory_bytes,
            stability_word(r.theoretical_stable),
            stability_word(r.measured_stable)
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct FullResults<'a> {
    results: &'a [BenchmarkResult],
    stability: &'a [StabilityOutcome],
    all_sorted: bool,
}

pub fn write_json<W: Write>(
    out: &mut W,
    results: &[BenchmarkResult],
    stability: &[StabilityOutcome],
) -> io::Result<()> {
    let full = FullResults {
        results,
        stability,
        all_sorted: results.iter().all(|r| r.sorted),
    };
    serde_json::to_writer_pretty(&mut *out, &full)?;
    writeln!(out)
}

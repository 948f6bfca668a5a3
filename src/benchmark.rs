//! Benchmark every engine over generated datasets.
//!
//! Usage:
//!   benchmark                       1k datasets, all engines, tables on stdout
//!   benchmark --sizes 1k,10k,100k   several sizes
//!   benchmark --algorithms tim,intro --iterations 3
//!   benchmark --stability-only      measured vs theoretical stability only
//!   benchmark --json                one JSON document instead of tables
//!
//! Progress goes through `log`; set `RUST_LOG=debug` for per-iteration times.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use instrumented_sort::dataset::{self, DatasetKind};
use instrumented_sort::harness::{self, BenchConfig, BenchmarkResult};
use instrumented_sort::report;
use instrumented_sort::AlgorithmKind;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.trim().to_lowercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('m') {
        (n, 1_000_000)
    } else if let Some(n) = s.strip_suffix('k') {
        (n, 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "benchmark")]
#[command(about = "Benchmark instrumented sorting engines across dataset shapes and sizes")]
struct Args {
    /// Dataset sizes (e.g., 1k,10k,1m)
    #[arg(long, value_parser = parse_count, value_delimiter = ',', default_value = "1k")]
    sizes: Vec<usize>,

    /// Directory holding the dataset files; missing files are generated
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Engines to run (e.g., tim,intro,"Heap Sort"); all when omitted
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<AlgorithmKind>,

    /// Timed repetitions per engine and dataset
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: u32,

    /// Seed for generated datasets and stability records
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Skip timing and only measure stability
    #[arg(long)]
    stability_only: bool,

    /// Record count for the stability check
    #[arg(long, default_value_t = 1000)]
    stability_size: usize,

    /// Summary CSV path (default: sorting_summary_<largest size>.csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print one JSON document instead of tables
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            iterations: self.iterations,
            stability_size: self.stability_size,
            seed: self.seed,
            ..BenchConfig::default()
        }
    }

    fn kinds(&self) -> Vec<AlgorithmKind> {
        if self.algorithms.is_empty() {
            AlgorithmKind::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }
}

fn run_benchmarks(args: &Args, kinds: &[AlgorithmKind]) -> Result<Vec<BenchmarkResult>> {
    let written = dataset::ensure_datasets(&args.data_dir, &args.sizes, args.seed)
        .with_context(|| format!("preparing datasets in {}", args.data_dir.display()))?;
    if !written.is_empty() {
        info!("generated {} dataset files", written.len());
    }

    let config = args.config();
    let mut results = Vec::new();
    for &size in &args.sizes {
        info!("size {}", size);
        for kind in DatasetKind::ALL {
            let path = args.data_dir.join(kind.file_name(size));
            let data = dataset::load(&path)?;
            for &algorithm in kinds {
                results.push(harness::run_algorithm(algorithm, kind.label(), &data, &config));
            }
        }
    }
    Ok(results)
}

fn print_tables(out: &mut impl Write, results: &[BenchmarkResult]) -> io::Result<()> {
    writeln!(out, "\n===== Sorting Algorithm Performance Evaluation Results =====\n")?;
    report::write_results_table(out, results)?;
    writeln!(out, "\n===== Algorithm Performance Comparison =====\n")?;
    report::write_comparison_table(out, results)?;
    writeln!(out, "\n===== Algorithm Theoretical Complexity and Stability =====\n")?;
    report::write_complexity_table(out, results)?;
    writeln!(out, "\n===== Stability Test Results Summary =====\n")?;
    report::write_stability_summary(out, &report::outcomes_from_results(results))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let kinds = args.kinds();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stability_only {
        let outcomes = harness::run_stability_only(&kinds, &args.config());
        if args.json {
            report::write_json(&mut out, &[], &outcomes)?;
        } else {
            writeln!(out, "\n===== Stability Test Results Summary =====\n")?;
            report::write_stability_summary(&mut out, &outcomes)?;
        }
        return Ok(());
    }

    let results = run_benchmarks(&args, &kinds)?;
    if args.json {
        report::write_json(&mut out, &results, &report::outcomes_from_results(&results))?;
    } else {
        print_tables(&mut out, &results)?;
    }

    let largest = args.sizes.iter().copied().max().unwrap_or_default();
    let csv_path = args
        .csv
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("sorting_summary_{}.csv", largest)));
    let mut csv = BufWriter::new(
        File::create(&csv_path).with_context(|| format!("creating {}", csv_path.display()))?,
    );
    report::write_csv(&mut csv, &results)?;
    csv.flush()?;
    info!("summary written to {}", csv_path.display());
    Ok(())
}

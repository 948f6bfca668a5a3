//! Benchmark inputs: seeded generators for the five input shapes and the
//! plain-text file format they are stored in.
//!
//! A dataset file holds the element count on the first line and the values,
//! separated by single spaces, on the second.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound of the random value range `1..=RANDOM_MAX`
pub const RANDOM_MAX: i32 = 1_000_000;
/// Share of a partially sorted input that starts out ascending
pub const SORTED_RATIO: f64 = 0.7;
/// Report label for files whose name matches no known kind
pub const OTHER_LABEL: &str = "Other";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    SortedAscending,
    SortedDescending,
    Random,
    PartiallySorted,
    ReverseSorted,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::SortedAscending,
        DatasetKind::SortedDescending,
        DatasetKind::Random,
        DatasetKind::PartiallySorted,
        DatasetKind::ReverseSorted,
    ];

    pub fn stem(self) -> &'static str {
        match self {
            DatasetKind::SortedAscending => "sorted_asc",
            DatasetKind::SortedDescending => "sorted_desc",
            DatasetKind::Random => "random",
            DatasetKind::PartiallySorted => "partially_sorted",
            DatasetKind::ReverseSorted => "reverse_sorted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::SortedAscending => "Sorted(Asc)",
            DatasetKind::SortedDescending => "Sorted(Desc)",
            DatasetKind::Random => "Random",
            DatasetKind::PartiallySorted => "Partially Sorted",
            DatasetKind::ReverseSorted => "Reverse Sorted",
        }
    }

    pub fn file_name(self, size: usize) -> String {
        format!("{}_{}.txt", self.stem(), size)
    }

    /// Recover the kind from a dataset file name (or path).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);
        Self::ALL.into_iter().find(|kind| name.contains(kind.stem()))
    }

    /// Generate `size` values. The same `(kind, size, seed)` always yields the
    /// same data.
    pub fn generate(self, size: usize, seed: u64) -> Vec<i32> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed ^ ((self as u64) << 56) ^ size as u64);
        match self {
            DatasetKind::SortedAscending => (1..=size as i32).collect(),
            DatasetKind::SortedDescending | DatasetKind::ReverseSorted => {
                (1..=size as i32).rev().collect()
            }
            DatasetKind::Random => (0..size).map(|_| rng.gen_range(1..=RANDOM_MAX)).collect(),
            DatasetKind::PartiallySorted => partially_sorted(size, &mut rng),
        }
    }
}

/// Report label for a dataset file name, `"Other"` when unrecognised
pub fn label_for(name: &str) -> &'static str {
    DatasetKind::from_file_name(name).map_or(OTHER_LABEL, DatasetKind::label)
}

fn partially_sorted(size: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<i32> {
    let sorted_len = (size as f64 * SORTED_RATIO) as usize;
    let mut data: Vec<i32> = (1..=sorted_len as i32).collect();
    data.extend((sorted_len..size).map(|_| rng.gen_range(1..=RANDOM_MAX)));

    let swaps = (size as f64 * (1.0 - SORTED_RATIO) * 0.5) as usize;
    for _ in 0..swaps {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        data.swap(a, b);
    }
    data
}

pub fn save(path: &Path, data: &[i32]) -> Result<()> {
    let emit = || -> std::io::Result<()> {
        let mut out = BufWriter::new(fs::File::create(path)?);
        writeln!(out, "{}", data.len())?;
        for (i, value) in data.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            write!(out, "{}", value)?;
        }
        writeln!(out)?;
        out.flush()
    };
    emit().map_err(|e| Error::io(path, e))
}

pub fn load(path: &Path) -> Result<Vec<i32>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut tokens = text.split_whitespace();

    let header = tokens.next().unwrap_or_default();
    let expected: usize = header.parse().map_err(|_| Error::Parse {
        path: path.to_path_buf(),
        token: header.to_string(),
    })?;

    let data = tokens
        .map(|token| {
            token.parse::<i32>().map_err(|_| Error::Parse {
                path: path.to_path_buf(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if data.len() != expected {
        return Err(Error::LengthMismatch {
            path: path.to_path_buf(),
            expected,
            found: data.len(),
        });
    }
    debug!("loaded {} values from {}", data.len(), path.display());
    Ok(data)
}

/// Create `dir` and every missing dataset file for `sizes`. Existing files are
/// left untouched. Returns the paths that were written.
pub fn ensure_datasets(dir: &Path, sizes: &[usize], seed: u64) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = Vec::new();
    for &size in sizes {
        for kind in DatasetKind::ALL {
            let path = dir.join(kind.file_name(size));
            if path.exists() {
                continue;
            }
            info!("generating {}", path.display());
            save(&path, &kind.generate(size, seed))?;
            written.push(path);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_round_trip_to_kinds() {
        for kind in DatasetKind::ALL {
            let name = kind.file_name(1000);
            assert_eq!(DatasetKind::from_file_name(&name), Some(kind));
            assert_eq!(label_for(&format!("data/{}", name)), kind.label());
        }
        assert_eq!(DatasetKind::SortedAscending.file_name(1000), "sorted_asc_1000.txt");
        assert_eq!(label_for("weird_1000.txt"), OTHER_LABEL);
    }

    #[test]
    fn sorted_kinds_are_exact() {
        assert_eq!(DatasetKind::SortedAscending.generate(5, 0), vec![1, 2, 3, 4, 5]);
        assert_eq!(DatasetKind::SortedDescending.generate(5, 0), vec![5, 4, 3, 2, 1]);
        assert_eq!(DatasetKind::ReverseSorted.generate(5, 0), vec![5, 4, 3, 2, 1]);
        assert!(DatasetKind::Random.generate(0, 0).is_empty());
    }

    #[test]
    fn generation_is_seeded() {
        let a = DatasetKind::Random.generate(500, 9);
        assert_eq!(a, DatasetKind::Random.generate(500, 9));
        assert_ne!(a, DatasetKind::Random.generate(500, 10));
        assert!(a.iter().all(|v| (1..=RANDOM_MAX).contains(v)));
    }

    #[test]
    fn partially_sorted_keeps_most_of_the_prefix() {
        let data = DatasetKind::PartiallySorted.generate(10_000, 3);
        assert_eq!(data.len(), 10_000);
        // 1500 swaps can disturb at most 3000 of the 7000 prefix slots
        let in_place = (0..7000).filter(|&i| data[i] == i as i32 + 1).count();
        assert!(in_place >= 4000, "{} in place", in_place);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random_4.txt");
        save(&path, &[-3, 0, 17, 2]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "4\n-3 0 17 2\n");
        assert_eq!(load(&path).unwrap(), vec![-3, 0, 17, 2]);
    }

    #[test]
    fn load_rejects_bad_files() {
        let dir = tempfile::tempdir().unwrap();

        let short = dir.path().join("short.txt");
        fs::write(&short, "3\n1 2\n").unwrap();
        assert!(matches!(
            load(&short),
            Err(Error::LengthMismatch { expected: 3, found: 2, .. })
        ));

        let junk = dir.path().join("junk.txt");
        fs::write(&junk, "2\n1 x\n").unwrap();
        assert!(matches!(load(&junk), Err(Error::Parse { token, .. }) if token == "x"));

        assert!(matches!(
            load(&dir.path().join("missing.txt")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn ensure_datasets_skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let written = ensure_datasets(&data_dir, &[10, 20], 1).unwrap();
        assert_eq!(written.len(), 10);

        let random = data_dir.join("random_10.txt");
        fs::write(&random, "1\n7\n").unwrap();
        let written = ensure_datasets(&data_dir, &[10, 20], 1).unwrap();
        assert!(written.is_empty());
        assert_eq!(load(&random).unwrap(), vec![7]);
    }
}

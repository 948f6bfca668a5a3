//! The closed set of engines, their theoretical properties, and name lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::baselines::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
use crate::contemporary::{
    CocktailSort, CombSort, IntroSort, LibrarySort, TimSort, TournamentSort,
};
use crate::counter::Counter;
use crate::error::Error;
use crate::Sorter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Library,
    Tim,
    Cocktail,
    Comb,
    Tournament,
    Intro,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Family {
    Conventional,
    Contemporary,
}

/// Growth class of an operation count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Linear,
    Linearithmic,
    Quadratic,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n²)",
        })
    }
}

#[derive(Debug)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub id: &'static str,
    pub family: Family,
    pub stable: bool,
    pub best: Complexity,
    pub average: Complexity,
    pub worst: Complexity,
}

use Complexity::{Linear, Linearithmic, Quadratic};

const fn info(
    name: &'static str,
    id: &'static str,
    family: Family,
    stable: bool,
    growth: [Complexity; 3],
) -> AlgorithmInfo {
    AlgorithmInfo {
        name,
        id,
        family,
        stable,
        best: growth[0],
        average: growth[1],
        worst: growth[2],
    }
}

// Indexed by `AlgorithmKind as usize`
static TABLE: [AlgorithmInfo; 12] = [
    info("Bubble Sort", "bubble", Family::Conventional, true, [Linear, Quadratic, Quadratic]),
    info("Insertion Sort", "insertion", Family::Conventional, true, [Linear, Quadratic, Quadratic]),
    info("Selection Sort", "selection", Family::Conventional, false, [Quadratic, Quadratic, Quadratic]),
    info("Quick Sort", "quick", Family::Conventional, false, [Linearithmic, Linearithmic, Quadratic]),
    info("Merge Sort", "merge", Family::Conventional, true, [Linearithmic, Linearithmic, Linearithmic]),
    info("Heap Sort", "heap", Family::Conventional, false, [Linearithmic, Linearithmic, Linearithmic]),
    info("Library Sort", "library", Family::Contemporary, true, [Linear, Linearithmic, Quadratic]),
    info("Tim Sort", "tim", Family::Contemporary, true, [Linear, Linearithmic, Linearithmic]),
    info("Cocktail Sort", "cocktail", Family::Contemporary, true, [Linear, Quadratic, Quadratic]),
    info("Comb Sort", "comb", Family::Contemporary, false, [Linearithmic, Quadratic, Quadratic]),
    info("Tournament Sort", "tournament", Family::Contemporary, false, [Linearithmic, Linearithmic, Linearithmic]),
    info("Intro Sort", "intro", Family::Contemporary, false, [Linearithmic, Linearithmic, Linearithmic]),
];

impl AlgorithmKind {
    /// Every engine, in reporting order
    pub const ALL: [AlgorithmKind; 12] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Selection,
        AlgorithmKind::Quick,
        AlgorithmKind::Merge,
        AlgorithmKind::Heap,
        AlgorithmKind::Library,
        AlgorithmKind::Tim,
        AlgorithmKind::Cocktail,
        AlgorithmKind::Comb,
        AlgorithmKind::Tournament,
        AlgorithmKind::Intro,
    ];

    pub fn info(self) -> &'static AlgorithmInfo {
        &TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn is_stable(self) -> bool {
        self.info().stable
    }
}

impl Sorter for AlgorithmKind {
    fn sort_by<T, F>(&self, data: &mut [T], is_less: F) -> Counter
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            AlgorithmKind::Bubble => BubbleSort.sort_by(data, is_less),
            AlgorithmKind::Insertion => InsertionSort.sort_by(data, is_less),
            AlgorithmKind::Selection => SelectionSort.sort_by(data, is_less),
            AlgorithmKind::Quick => QuickSort.sort_by(data, is_less),
            AlgorithmKind::Merge => MergeSort.sort_by(data, is_less),
            AlgorithmKind::Heap => HeapSort.sort_by(data, is_less),
            AlgorithmKind::Library => LibrarySort::default().sort_by(data, is_less),
            AlgorithmKind::Tim => TimSort.sort_by(data, is_less),
            AlgorithmKind::Cocktail => CocktailSort.sort_by(data, is_less),
            AlgorithmKind::Comb => CombSort.sort_by(data, is_less),
            AlgorithmKind::Tournament => TournamentSort.sort_by(data, is_less),
            AlgorithmKind::Intro => IntroSort.sort_by(data, is_less),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    /// Accepts `tim`, `Tim Sort`, `tim_sort` or `timsort`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let bare = wanted
            .strip_suffix("_sort")
            .or_else(|| wanted.strip_suffix("sort"))
            .unwrap_or(&wanted)
            .trim_end();

        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.id() == bare || kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_indexed_by_kind() {
        for (i, kind) in AlgorithmKind::ALL.into_iter().enumerate() {
            assert_eq!(kind as usize, i);
            assert!(kind.name().to_lowercase().starts_with(kind.id()));
        }
        let ids: HashSet<_> = AlgorithmKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), AlgorithmKind::ALL.len());
    }

    #[test]
    fn six_of_each_family() {
        let contemporary = AlgorithmKind::ALL
            .iter()
            .filter(|k| k.info().family == Family::Contemporary)
            .count();
        assert_eq!(contemporary, 6);
    }

    #[test]
    fn theoretical_stability() {
        let stable: Vec<_> = AlgorithmKind::ALL
            .into_iter()
            .filter(|k| k.is_stable())
            .collect();
        assert_eq!(
            stable,
            vec![
                AlgorithmKind::Bubble,
                AlgorithmKind::Insertion,
                AlgorithmKind::Merge,
                AlgorithmKind::Library,
                AlgorithmKind::Tim,
                AlgorithmKind::Cocktail,
            ]
        );
    }

    #[test]
    fn parses_ids_names_and_suffixes() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.id().parse::<AlgorithmKind>().unwrap(), kind);
            assert_eq!(kind.name().parse::<AlgorithmKind>().unwrap(), kind);
            assert_eq!(kind.to_string().to_uppercase().parse::<AlgorithmKind>().unwrap(), kind);
        }
        assert_eq!("tim_sort".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Tim);
        assert_eq!("IntroSort".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Intro);
        assert!(matches!(
            "shell".parse::<AlgorithmKind>(),
            Err(Error::UnknownAlgorithm(name)) if name == "shell"
        ));
    }

    #[test]
    fn complexity_renders_big_o() {
        let tim = AlgorithmKind::Tim.info();
        assert_eq!(tim.best.to_string(), "O(n)");
        assert_eq!(tim.worst.to_string(), "O(n log n)");
        assert_eq!(AlgorithmKind::Bubble.info().worst.to_string(), "O(n²)");
    }
}

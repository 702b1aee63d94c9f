//! Algorithm registry and step generators.
//!
//! Every algorithm is a plain function over fixed sample data that records a
//! [`Snapshot`] for each meaningful state. [`build_sequence`] looks the
//! generator up by [`AlgorithmId`] and wraps its output in a
//! [`StepSequence`]. Identifiers that do not name a known algorithm resolve
//! to [`AlgorithmId::DEFAULT`] (binary search) instead of failing.

pub mod bits;
pub mod graph;
pub mod greedy;
pub mod heap;
pub mod kadane;
pub mod scene;
pub mod searching;
pub mod sorting;

pub use scene::{Mark, Scene, Snapshot};

use crate::timeline::StepSequence;
use std::fmt;
use std::str::FromStr;
use tracing::{error, warn};

/// The sequence type produced for every algorithm
pub type AlgorithmSequence = StepSequence<Snapshot>;

/// Closed set of visualized algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    BinarySearchTree,
    GraphDfs,
    GraphBfs,
    BinarySearch,
    InsertionSort,
    TopologicalSort,
    Kadane,
    CountingSort,
    MinHeap,
    MaxHeap,
    DutchNationalFlag,
    BitManipulation,
    Greedy,
}

impl AlgorithmId {
    /// Used whenever an identifier cannot be resolved
    pub const DEFAULT: AlgorithmId = AlgorithmId::BinarySearch;

    /// Library order
    pub const ALL: [AlgorithmId; 13] = [
        AlgorithmId::BinarySearchTree,
        AlgorithmId::GraphDfs,
        AlgorithmId::GraphBfs,
        AlgorithmId::BinarySearch,
        AlgorithmId::InsertionSort,
        AlgorithmId::TopologicalSort,
        AlgorithmId::Kadane,
        AlgorithmId::CountingSort,
        AlgorithmId::MinHeap,
        AlgorithmId::MaxHeap,
        AlgorithmId::DutchNationalFlag,
        AlgorithmId::BitManipulation,
        AlgorithmId::Greedy,
    ];

    /// Stable string identifier
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::BinarySearchTree => "bst",
            AlgorithmId::GraphDfs => "graph-dfs",
            AlgorithmId::GraphBfs => "graph-bfs",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::TopologicalSort => "topological-sort",
            AlgorithmId::Kadane => "kadanes-algorithm",
            AlgorithmId::CountingSort => "counting-sort",
            AlgorithmId::MinHeap => "min-heap",
            AlgorithmId::MaxHeap => "max-heap",
            AlgorithmId::DutchNationalFlag => "dutch-national-flag",
            AlgorithmId::BitManipulation => "bit-manipulation",
            AlgorithmId::Greedy => "greedy-algorithm",
        }
    }

    /// Resolve an identifier, falling back to [`AlgorithmId::DEFAULT`]
    pub fn resolve(id: &str) -> AlgorithmId {
        id.parse().unwrap_or_else(|err: UnknownAlgorithm| {
            warn!(%err, fallback = AlgorithmId::DEFAULT.as_str(), "using default algorithm");
            AlgorithmId::DEFAULT
        })
    }

    fn generator(self) -> fn() -> Vec<Snapshot> {
        match self {
            AlgorithmId::BinarySearchTree => searching::bst_search,
            AlgorithmId::GraphDfs => graph::dfs,
            AlgorithmId::GraphBfs => graph::bfs,
            AlgorithmId::BinarySearch => searching::binary_search,
            AlgorithmId::InsertionSort => sorting::insertion_sort,
            AlgorithmId::TopologicalSort => graph::topological_sort,
            AlgorithmId::Kadane => kadane::max_subarray,
            AlgorithmId::CountingSort => sorting::counting_sort,
            AlgorithmId::MinHeap => heap::min_heap_insert,
            AlgorithmId::MaxHeap => heap::max_heap_extract,
            AlgorithmId::DutchNationalFlag => sorting::dutch_national_flag,
            AlgorithmId::BitManipulation => bits::bit_tricks,
            AlgorithmId::Greedy => greedy::activity_selection,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Identifier that names no known algorithm
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for AlgorithmId {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Record every step of `id` over its fixed sample input.
///
/// Deterministic: repeated calls return identical sequences.
pub fn build_sequence(id: AlgorithmId) -> AlgorithmSequence {
    let states = (id.generator())();
    match StepSequence::new(states) {
        Ok(sequence) => sequence,
        Err(err) => {
            error!(algorithm = %id, %err, "generator produced no steps");
            placeholder(id)
        }
    }
}

/// Same as [`build_sequence`] for a string identifier, with fallback
pub fn build_sequence_for(id: &str) -> (AlgorithmId, AlgorithmSequence) {
    let resolved = AlgorithmId::resolve(id);
    (resolved, build_sequence(resolved))
}

fn placeholder(id: AlgorithmId) -> AlgorithmSequence {
    let snapshot = Snapshot::new(
        format!("{} has no recorded steps", id),
        Scene::Array(scene::ArrayScene::default()),
    );
    StepSequence::single(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_id_falls_back() {
        assert_eq!(AlgorithmId::resolve("bogo-sort"), AlgorithmId::BinarySearch);
        let (id, seq) = build_sequence_for("");
        assert_eq!(id, AlgorithmId::DEFAULT);
        assert_eq!(seq, build_sequence(AlgorithmId::BinarySearch));
    }

    #[test]
    fn test_every_algorithm_has_steps() {
        for id in AlgorithmId::ALL {
            let seq = build_sequence(id);
            assert!(seq.len() >= 2, "{} recorded only its initial state", id);
        }
    }
}

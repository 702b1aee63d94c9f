// Integration tests for the algorithm generators and catalog

use algotty::algorithms::{build_sequence, build_sequence_for, AlgorithmId, Scene};
use algotty::catalog::{self, ALL_CATEGORIES, CATALOG};

fn final_array(id: AlgorithmId) -> Vec<i64> {
    let sequence = build_sequence(id);
    let last = sequence.get(sequence.last_index()).expect("last step");
    match &last.state().scene {
        Scene::Array(array) => array.values.clone(),
        other => panic!("{} ended on a non-array scene: {:?}", id, other),
    }
}

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_every_algorithm_has_steps() {
    for id in AlgorithmId::ALL {
        let sequence = build_sequence(id);
        assert!(sequence.len() > 1, "{} recorded a single step", id);
        for (i, step) in sequence.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert!(!step.state().description.is_empty());
        }
    }
}

#[test]
fn test_generators_are_deterministic() {
    for id in AlgorithmId::ALL {
        assert_eq!(build_sequence(id), build_sequence(id), "{} differs between runs", id);
    }
}

#[test]
fn test_unknown_id_falls_back_to_default() {
    let (id, sequence) = build_sequence_for("bogo-sort");
    assert_eq!(id, AlgorithmId::DEFAULT);
    assert_eq!(sequence, build_sequence(AlgorithmId::DEFAULT));

    let (id, _) = build_sequence_for("max-heap");
    assert_eq!(id, AlgorithmId::MaxHeap);
}

#[test]
fn test_sorting_algorithms_end_sorted() {
    for id in [
        AlgorithmId::InsertionSort,
        AlgorithmId::CountingSort,
        AlgorithmId::DutchNationalFlag,
    ] {
        let values = final_array(id);
        assert!(is_sorted(&values), "{} ended unsorted: {:?}", id, values);
    }
}

#[test]
fn test_catalog_covers_every_algorithm() {
    assert_eq!(CATALOG.len(), AlgorithmId::ALL.len());
    for id in AlgorithmId::ALL {
        assert_eq!(catalog::entry(id).id, id);
    }
}

#[test]
fn test_catalog_filter() {
    assert_eq!(catalog::filter("", ALL_CATEGORIES).len(), CATALOG.len());

    let graph = catalog::filter("", "Graph");
    assert_eq!(graph.len(), 3);
    assert!(graph.iter().all(|info| info.category == "Graph"));

    let sorted: Vec<AlgorithmId> = catalog::filter("SORT", ALL_CATEGORIES)
        .iter()
        .map(|info| info.id)
        .collect();
    assert!(sorted.contains(&AlgorithmId::InsertionSort));
    assert!(sorted.contains(&AlgorithmId::CountingSort));
    assert!(sorted.contains(&AlgorithmId::TopologicalSort));

    assert!(catalog::filter("quantum", ALL_CATEGORIES).is_empty());
    assert!(catalog::filter("heap", "Sorting").is_empty());
}

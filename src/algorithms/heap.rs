// Binary heap insert (sift-up) and extract (sift-down)

use super::scene::{Scene, Snapshot, TreeScene};

const MIN_HEAP: [i64; 7] = [10, 15, 20, 30, 40, 50, 60];
const MIN_HEAP_INSERT: i64 = 5;
const MAX_HEAP: [i64; 7] = [60, 50, 40, 30, 20, 10, 5];

fn parent(i: usize) -> Option<usize> {
    (i > 0).then(|| (i - 1) / 2)
}

fn heap_scene(values: &[i64], compared: &[usize], active: Option<usize>) -> Scene {
    let mut tree = TreeScene::from_heap(values);
    tree.path = compared.to_vec();
    tree.active = active;
    Scene::Tree(tree)
}

pub fn min_heap_insert() -> Vec<Snapshot> {
    let mut heap = MIN_HEAP.to_vec();
    let value = MIN_HEAP_INSERT;
    let mut steps = vec![Snapshot::new(
        format!("Initial min-heap {:?}", heap),
        heap_scene(&heap, &[], None),
    )];

    heap.push(value);
    let mut current = heap.len() - 1;
    steps.push(Snapshot::new(
        format!("Insert {} at the end of the heap", value),
        heap_scene(&heap, &[], Some(current)),
    ));

    while let Some(p) = parent(current) {
        if heap[current] >= heap[p] {
            steps.push(Snapshot::new(
                format!("{} >= parent {}, stop", heap[current], heap[p]),
                heap_scene(&heap, &[current, p], Some(current)),
            ));
            break;
        }
        steps.push(Snapshot::new(
            format!("{} < parent {}, swap them", heap[current], heap[p]),
            heap_scene(&heap, &[current, p], Some(current)),
        ));
        heap.swap(current, p);
        current = p;
        steps.push(Snapshot::new(
            "After swap",
            heap_scene(&heap, &[], Some(current)),
        ));
    }

    let mut done = TreeScene::from_heap(&heap);
    done.found = Some(current);
    steps.push(Snapshot::new(
        format!("Min-heap property restored: {:?}", heap),
        Scene::Tree(done),
    ));
    steps
}

pub fn max_heap_extract() -> Vec<Snapshot> {
    let mut heap = MAX_HEAP.to_vec();
    let mut steps = vec![Snapshot::new(
        format!("Initial max-heap {:?}", heap),
        heap_scene(&heap, &[], None),
    )];

    let max = heap[0];
    steps.push(Snapshot::new(
        format!("Extract maximum element {}", max),
        heap_scene(&heap, &[], Some(0)),
    ));

    let last = heap.len() - 1;
    heap.swap(0, last);
    heap.pop();
    steps.push(Snapshot::new(
        format!("Move the last element {} to the root", heap[0]),
        heap_scene(&heap, &[], Some(0)),
    ));

    let mut current = 0;
    loop {
        let children: Vec<usize> = [2 * current + 1, 2 * current + 2]
            .into_iter()
            .filter(|&c| c < heap.len())
            .collect();
        let Some(&largest) = children.iter().max_by_key(|&&c| heap[c]) else {
            break;
        };

        let mut compared = vec![current];
        compared.extend(&children);
        if heap[largest] <= heap[current] {
            steps.push(Snapshot::new(
                format!("{} is not smaller than its children, stop", heap[current]),
                heap_scene(&heap, &compared, Some(current)),
            ));
            break;
        }

        steps.push(Snapshot::new(
            format!(
                "{} < larger child {}, swap them",
                heap[current], heap[largest]
            ),
            heap_scene(&heap, &compared, Some(current)),
        ));
        heap.swap(current, largest);
        current = largest;
        steps.push(Snapshot::new(
            "After swap",
            heap_scene(&heap, &[], Some(current)),
        ));
    }

    let mut done = TreeScene::from_heap(&heap);
    done.found = Some(current);
    steps.push(Snapshot::new(
        format!("Extracted {}; max-heap property restored: {:?}", max, heap),
        Scene::Tree(done),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_heap(steps: &[Snapshot]) -> Vec<i64> {
        match &steps.last().unwrap().scene {
            Scene::Tree(t) => t.nodes.iter().map(|n| n.value).collect(),
            other => panic!("unexpected scene {:?}", other),
        }
    }

    #[test]
    fn test_min_heap_insert_bubbles_to_root() {
        let heap = final_heap(&min_heap_insert());
        assert_eq!(heap[0], MIN_HEAP_INSERT);
        for i in 1..heap.len() {
            assert!(heap[parent(i).unwrap()] <= heap[i]);
        }
    }

    #[test]
    fn test_max_heap_extract_keeps_property() {
        let heap = final_heap(&max_heap_extract());
        assert_eq!(heap.len(), MAX_HEAP.len() - 1);
        assert_eq!(heap[0], 50);
        for i in 1..heap.len() {
            assert!(heap[parent(i).unwrap()] >= heap[i]);
        }
    }
}

// Binary search over a sorted array and lookup in a binary search tree

use super::scene::{ArrayScene, Mark, Scene, Snapshot, TreeNode, TreeScene};
use std::cmp::Ordering;

const SORTED: [i64; 11] = [5, 13, 19, 24, 29, 38, 45, 53, 67, 78, 91];
const SEARCH_TARGET: i64 = 45;

const BST_VALUES: [i64; 7] = [50, 25, 75, 12, 37, 62, 87];
const BST_TARGET: i64 = 62;

fn window(values: &[i64], low: usize, high: usize) -> ArrayScene {
    let mut scene = ArrayScene::new(values);
    for i in (0..values.len()).filter(|&i| i < low || i > high) {
        scene = scene.mark(i, Mark::Dimmed);
    }
    scene.pointer("low", low).pointer("high", high)
}

pub fn binary_search() -> Vec<Snapshot> {
    let arr = &SORTED;
    let target = SEARCH_TARGET;
    let mut steps = vec![Snapshot::new(
        format!("Search for {} in {:?}", target, arr),
        Scene::Array(window(arr, 0, arr.len() - 1)),
    )];

    let (mut low, mut high) = (0usize, arr.len() - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        let base = window(arr, low, high).pointer("mid", mid);
        steps.push(Snapshot::new(
            format!("Compare target {} with middle element {}", target, arr[mid]),
            Scene::Array(base.clone().mark(mid, Mark::Active)),
        ));

        match target.cmp(&arr[mid]) {
            Ordering::Equal => {
                steps.push(Snapshot::new(
                    format!("Found {} at index {}", target, mid),
                    Scene::Array(base.mark(mid, Mark::Done)),
                ));
                steps.push(Snapshot::new(
                    format!("Binary search complete: return index {}", mid),
                    Scene::Array(ArrayScene::new(arr).mark(mid, Mark::Done)),
                ));
                return steps;
            }
            Ordering::Greater => {
                low = mid + 1;
                steps.push(Snapshot::new(
                    format!(
                        "{} > {}, continue in the right half {:?}",
                        target,
                        arr[mid],
                        &arr[low..=high]
                    ),
                    Scene::Array(window(arr, low, high)),
                ));
            }
            Ordering::Less => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
                steps.push(Snapshot::new(
                    format!(
                        "{} < {}, continue in the left half {:?}",
                        target,
                        arr[mid],
                        &arr[low..=high]
                    ),
                    Scene::Array(window(arr, low, high)),
                ));
            }
        }
    }

    steps.push(Snapshot::new(
        format!("{} is not in the array", target),
        Scene::Array(ArrayScene::new(arr)),
    ));
    steps
}

/// Build a BST by inserting `values` in order; duplicates are skipped
fn build_bst(values: &[i64]) -> TreeScene {
    let mut nodes: Vec<TreeNode> = Vec::with_capacity(values.len());
    for &value in values {
        let new_index = nodes.len();
        let mut cursor = if nodes.is_empty() { None } else { Some(0) };
        let mut duplicate = false;
        while let Some(i) = cursor {
            let slot = match value.cmp(&nodes[i].value) {
                Ordering::Less => &mut nodes[i].left,
                Ordering::Greater => &mut nodes[i].right,
                Ordering::Equal => {
                    duplicate = true;
                    break;
                }
            };
            match *slot {
                Some(child) => cursor = Some(child),
                None => {
                    *slot = Some(new_index);
                    cursor = None;
                }
            }
        }
        if !duplicate {
            nodes.push(TreeNode {
                value,
                left: None,
                right: None,
            });
        }
    }

    TreeScene {
        root: (!nodes.is_empty()).then_some(0),
        nodes,
        path: Vec::new(),
        active: None,
        found: None,
    }
}

pub fn bst_search() -> Vec<Snapshot> {
    let tree = build_bst(&BST_VALUES);
    let target = BST_TARGET;
    let mut steps = vec![Snapshot::new(
        format!("Search for {} starting at the root", target),
        Scene::Tree(tree.clone()),
    )];

    let mut path = Vec::new();
    let mut cursor = tree.root;
    while let Some(i) = cursor {
        path.push(i);
        let node = &tree.nodes[i];
        let mut scene = tree.clone();
        scene.path = path.clone();
        scene.active = Some(i);

        match target.cmp(&node.value) {
            Ordering::Equal => {
                scene.found = Some(i);
                steps.push(Snapshot::new(
                    format!("Found {} in the tree", target),
                    Scene::Tree(scene),
                ));
                return steps;
            }
            Ordering::Less => {
                steps.push(Snapshot::new(
                    format!(
                        "Compare {} with {}: {} < {}, go to the left subtree",
                        target, node.value, target, node.value
                    ),
                    Scene::Tree(scene),
                ));
                cursor = node.left;
            }
            Ordering::Greater => {
                steps.push(Snapshot::new(
                    format!(
                        "Compare {} with {}: {} > {}, go to the right subtree",
                        target, node.value, target, node.value
                    ),
                    Scene::Tree(scene),
                ));
                cursor = node.right;
            }
        }
    }

    let mut scene = tree;
    scene.path = path;
    steps.push(Snapshot::new(
        format!("{} is not in the tree", target),
        Scene::Tree(scene),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_finds_index_six() {
        let steps = binary_search();
        let last = steps.last().unwrap();
        assert!(last.description.contains("index 6"));
        match &last.scene {
            Scene::Array(a) => assert_eq!(a.mark_at(6), Some(Mark::Done)),
            other => panic!("unexpected scene {:?}", other),
        }
        // initial, 3 comparisons, 2 narrowing steps, found, complete
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn test_bst_shape() {
        let tree = build_bst(&BST_VALUES);
        assert_eq!(tree.nodes[0].value, 50);
        let right = tree.nodes[0].right.unwrap();
        assert_eq!(tree.nodes[right].value, 75);
        let left_of_right = tree.nodes[right].left.unwrap();
        assert_eq!(tree.nodes[left_of_right].value, 62);
    }

    #[test]
    fn test_bst_duplicates_skipped() {
        let tree = build_bst(&[5, 3, 5, 3]);
        assert_eq!(tree.nodes.len(), 2);
    }

    #[test]
    fn test_bst_search_path() {
        let steps = bst_search();
        assert_eq!(steps.len(), 4);
        match &steps[3].scene {
            Scene::Tree(t) => {
                let values: Vec<i64> = t.path.iter().map(|&i| t.nodes[i].value).collect();
                assert_eq!(values, vec![50, 75, 62]);
                assert_eq!(t.found, t.path.last().copied());
            }
            other => panic!("unexpected scene {:?}", other),
        }
    }
}

// Maximum subarray sum

use super::scene::{ArrayScene, Mark, Scene, Snapshot};

const INPUT: [i64; 9] = [-2, 1, -3, 4, -1, 2, 1, -5, 4];

fn range_scene(values: &[i64], best: (usize, usize), sums: &[i64]) -> ArrayScene {
    (best.0..=best.1)
        .fold(ArrayScene::new(values), |scene, i| scene.mark(i, Mark::Done))
        .pointer("start", best.0)
        .pointer("end", best.1)
        .aux("max ending here", sums.to_vec())
}

pub fn max_subarray() -> Vec<Snapshot> {
    let arr = &INPUT;
    let mut current = arr[0];
    let mut best = arr[0];
    let mut start = 0;
    let mut range = (0, 0);
    let mut sums = vec![current];

    let mut steps = vec![Snapshot::new(
        format!(
            "Start at index 0: current sum = {}, best sum = {}",
            current, best
        ),
        Scene::Array(range_scene(arr, range, &sums).mark(0, Mark::Active)),
    )];

    for i in 1..arr.len() {
        let extended = current + arr[i];
        let action = if arr[i] > extended {
            current = arr[i];
            start = i;
            format!("{} alone beats extending ({}), start a new subarray", arr[i], extended)
        } else {
            current = extended;
            format!("Extend the subarray with {}: current sum = {}", arr[i], current)
        };
        sums.push(current);

        let description = if current > best {
            best = current;
            range = (start, i);
            format!("{}; new best sum {} over [{}..={}]", action, best, start, i)
        } else {
            format!("{}; best sum stays {}", action, best)
        };
        steps.push(Snapshot::new(
            description,
            Scene::Array(range_scene(arr, range, &sums).mark(i, Mark::Active).pointer("i", i)),
        ));
    }

    steps.push(Snapshot::new(
        format!(
            "Maximum subarray {:?} has sum {}",
            &arr[range.0..=range.1],
            best
        ),
        Scene::Array(range_scene(arr, range, &sums)),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_subarray() {
        let steps = max_subarray();
        assert_eq!(steps.len(), INPUT.len() + 1);
        let last = steps.last().unwrap();
        assert!(last.description.contains("[4, -1, 2, 1]"));
        assert!(last.description.ends_with("sum 6"));
    }
}

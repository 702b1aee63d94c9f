// Insertion sort, counting sort and three-way partitioning

use super::scene::{ArrayScene, Mark, Scene, Snapshot};

const INSERTION_INPUT: [i64; 8] = [29, 10, 14, 37, 20, 25, 44, 15];
const COUNTING_INPUT: [i64; 12] = [4, 2, 2, 8, 3, 3, 1, 0, 5, 7, 6, 2];
const FLAG_INPUT: [i64; 12] = [2, 0, 1, 1, 0, 2, 0, 1, 2, 0, 1, 2];

fn sorted_prefix(values: &[i64], len: usize) -> ArrayScene {
    (0..len).fold(ArrayScene::new(values), |scene, i| scene.mark(i, Mark::Done))
}

pub fn insertion_sort() -> Vec<Snapshot> {
    let mut arr = INSERTION_INPUT.to_vec();
    let mut steps = vec![Snapshot::new(
        format!("Start with array {:?}", arr),
        Scene::Array(sorted_prefix(&arr, 1)),
    )];

    for i in 1..arr.len() {
        let key = arr[i];
        steps.push(Snapshot::new(
            format!("Consider element {}", key),
            Scene::Array(sorted_prefix(&arr, i).mark(i, Mark::Active).pointer("i", i)),
        ));

        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;

        let description = if j == i {
            format!("{} is already in the correct position → {:?}", key, arr)
        } else {
            format!("Insert {} at position {} → {:?}", key, j, arr)
        };
        steps.push(Snapshot::new(
            description,
            Scene::Array(sorted_prefix(&arr, i + 1).mark(j, Mark::Swap).pointer("i", i)),
        ));
    }

    steps.push(Snapshot::new(
        format!("Sorting complete: {:?}", arr),
        Scene::Array(sorted_prefix(&arr, arr.len())),
    ));
    steps
}

pub fn counting_sort() -> Vec<Snapshot> {
    let input = COUNTING_INPUT.to_vec();
    let max = input.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0i64; usize::try_from(max).unwrap_or(0) + 1];

    let mut steps = vec![Snapshot::new(
        format!("Start with array {:?}", input),
        Scene::Array(ArrayScene::new(&input)),
    )];
    steps.push(Snapshot::new(
        format!("Maximum value is {}, create a count array of size {}", max, counts.len()),
        Scene::Array(ArrayScene::new(&input).aux("count", counts.clone())),
    ));

    for (i, &value) in input.iter().enumerate() {
        let bucket = value as usize;
        counts[bucket] += 1;
        steps.push(Snapshot::new(
            format!("Count {}: count[{}] = {}", value, bucket, counts[bucket]),
            Scene::Array(
                ArrayScene::new(&input)
                    .mark(i, Mark::Active)
                    .aux("count", counts.clone()),
            ),
        ));
    }

    for bucket in 1..counts.len() {
        counts[bucket] += counts[bucket - 1];
    }
    steps.push(Snapshot::new(
        "Accumulate counts so each entry holds the final position boundary",
        Scene::Array(ArrayScene::new(&input).aux("prefix", counts.clone())),
    ));

    // Walk right to left to keep equal keys stable
    let mut output = vec![0i64; input.len()];
    let mut placed = vec![false; input.len()];
    for (i, &value) in input.iter().enumerate().rev() {
        let bucket = value as usize;
        counts[bucket] -= 1;
        let position = counts[bucket] as usize;
        output[position] = value;
        placed[position] = true;

        let mut scene = ArrayScene::new(&output).mark(position, Mark::Active);
        for (p, _) in placed.iter().enumerate().filter(|(p, done)| **done && *p != position) {
            scene = scene.mark(p, Mark::Done);
        }
        steps.push(Snapshot::new(
            format!("Place {} (input index {}) at output index {}", value, i, position),
            Scene::Array(scene.aux("prefix", counts.clone())),
        ));
    }

    steps.push(Snapshot::new(
        format!("Sorting complete: {:?}", output),
        Scene::Array(sorted_prefix(&output, output.len())),
    ));
    steps
}

pub fn dutch_national_flag() -> Vec<Snapshot> {
    let mut arr = FLAG_INPUT.to_vec();
    let flag_scene = |arr: &[i64], low: usize, mid: usize, high: usize| {
        let mut scene = ArrayScene::new(arr).pointer("low", low).pointer("mid", mid);
        if high > 0 {
            scene = scene.pointer("high", high - 1);
        }
        scene
    };

    // [0, low) are 0s, [low, mid) are 1s, [high, len) are 2s
    let (mut low, mut mid, mut high) = (0usize, 0usize, arr.len());
    let mut steps = vec![Snapshot::new(
        format!("Partition {:?} into 0s, 1s and 2s", arr),
        Scene::Array(flag_scene(&arr, low, mid, high)),
    )];

    while mid < high {
        let value = arr[mid];
        let description = match value {
            0 => {
                arr.swap(low, mid);
                let text = format!("arr[{}] = 0: swap with low ({}) and advance low and mid", mid, low);
                low += 1;
                mid += 1;
                text
            }
            1 => {
                let text = format!("arr[{}] = 1: already in the middle, advance mid", mid);
                mid += 1;
                text
            }
            _ => {
                high -= 1;
                arr.swap(mid, high);
                format!("arr[{}] = 2: swap with high ({}) and shrink high", mid, high)
            }
        };
        steps.push(Snapshot::new(
            description,
            Scene::Array(flag_scene(&arr, low, mid, high).mark(mid.min(arr.len() - 1), Mark::Active)),
        ));
    }

    steps.push(Snapshot::new(
        format!("Partitioning complete: {:?}", arr),
        Scene::Array(sorted_prefix(&arr, arr.len())),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_values(steps: &[Snapshot]) -> Vec<i64> {
        match &steps.last().unwrap().scene {
            Scene::Array(a) => a.values.clone(),
            other => panic!("unexpected scene {:?}", other),
        }
    }

    fn sorted(input: &[i64]) -> Vec<i64> {
        let mut v = input.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_insertion_sort_result() {
        let steps = insertion_sort();
        assert_eq!(final_values(&steps), sorted(&INSERTION_INPUT));
        assert_eq!(steps.len(), 2 + 2 * (INSERTION_INPUT.len() - 1));
    }

    #[test]
    fn test_counting_sort_result() {
        let steps = counting_sort();
        assert_eq!(final_values(&steps), sorted(&COUNTING_INPUT));
    }

    #[test]
    fn test_dutch_flag_result() {
        let steps = dutch_national_flag();
        assert_eq!(final_values(&steps), sorted(&FLAG_INPUT));
    }
}

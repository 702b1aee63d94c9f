// Activity selection: always take the compatible activity that finishes first

use super::scene::{Activity, ActivityScene, Scene, Snapshot};

const ACTIVITIES: [(u32, u32); 6] = [(1, 2), (3, 4), (0, 6), (5, 7), (8, 9), (5, 9)];

pub fn activity_selection() -> Vec<Snapshot> {
    let mut activities: Vec<Activity> = ACTIVITIES
        .iter()
        .enumerate()
        .map(|(id, &(start, finish))| Activity { id, start, finish })
        .collect();

    let mut scene = ActivityScene {
        activities: activities.clone(),
        selected: Vec::new(),
        rejected: Vec::new(),
        current: None,
        last_finish: None,
    };
    let mut steps = vec![Snapshot::new(
        format!("{} activities with different start and finish times", activities.len()),
        Scene::Activities(scene.clone()),
    )];

    activities.sort_by_key(|a| a.finish);
    scene.activities = activities.clone();
    steps.push(Snapshot::new(
        "Sort the activities by finish time",
        Scene::Activities(scene.clone()),
    ));

    for activity in &activities {
        scene.current = Some(activity.id);
        let description = match scene.last_finish {
            Some(finish) if activity.start < finish => {
                scene.rejected.push(activity.id);
                format!(
                    "Activity {} starts at {} before the last selected finish {}, skip it",
                    activity.id, activity.start, finish
                )
            }
            _ => {
                scene.selected.push(activity.id);
                scene.last_finish = Some(activity.finish);
                format!(
                    "Activity {} ({}-{}) is compatible, select it",
                    activity.id, activity.start, activity.finish
                )
            }
        };
        steps.push(Snapshot::new(description, Scene::Activities(scene.clone())));
    }

    scene.current = None;
    let chosen: Vec<String> = scene.selected.iter().map(|id| id.to_string()).collect();
    steps.push(Snapshot::new(
        format!(
            "Selected {} activities: {}",
            scene.selected.len(),
            chosen.join(", ")
        ),
        Scene::Activities(scene),
    ));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_maximum_compatible_set() {
        let steps = activity_selection();
        assert_eq!(steps.len(), 2 + ACTIVITIES.len() + 1);
        match &steps.last().unwrap().scene {
            Scene::Activities(a) => {
                assert_eq!(a.selected, vec![0, 1, 3, 4]);
                assert_eq!(a.rejected, vec![2, 5]);
            }
            other => panic!("unexpected scene {:?}", other),
        }
    }
}

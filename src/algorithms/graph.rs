// Breadth-first, depth-first and topological traversals over fixed sample graphs

use super::scene::{GraphScene, Scene, Snapshot};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

const VERTICES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];
const EDGES: [(usize, usize); 7] = [(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (2, 6), (3, 7)];

/// Course prerequisites: `(prerequisite, course)`
const COURSES: [(&str, &str); 6] = [
    ("A", "Math 101"),
    ("B", "CS 101"),
    ("C", "Physics 101"),
    ("D", "CS 201"),
    ("E", "Math 201"),
    ("F", "CS 301"),
];
const PREREQUISITES: [(usize, usize); 5] = [(0, 2), (0, 4), (1, 3), (3, 5), (4, 5)];

/// Adjacency lists in ascending neighbor order
fn adjacency(vertex_count: usize, edges: &[(usize, usize)], directed: bool) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); vertex_count];
    for &(a, b) in edges {
        adj[a].push(b);
        if !directed {
            adj[b].push(a);
        }
    }
    for neighbors in adj.iter_mut() {
        neighbors.sort_unstable();
    }
    adj
}

fn names(vertices: &[&str], ids: &[usize]) -> String {
    ids.iter()
        .map(|&i| vertices[i])
        .collect::<Vec<_>>()
        .join(", ")
}

/// Captures scenes over one graph as a traversal progresses
struct Recorder {
    base: GraphScene,
    steps: Vec<Snapshot>,
}

impl Recorder {
    fn new(vertices: &[&'static str], edges: &[(usize, usize)], directed: bool, label: &'static str) -> Self {
        Recorder {
            base: GraphScene {
                vertices: vertices.to_vec(),
                edges: edges.to_vec(),
                directed,
                visited: Vec::new(),
                active: None,
                frontier: Vec::new(),
                frontier_label: label,
                order: Vec::new(),
            },
            steps: Vec::new(),
        }
    }

    fn record(
        &mut self,
        description: String,
        visited: &[usize],
        active: Option<usize>,
        frontier: Vec<usize>,
        order: &[usize],
    ) {
        let mut scene = self.base.clone();
        scene.visited = visited.to_vec();
        scene.active = active;
        scene.frontier = frontier;
        scene.order = order.to_vec();
        self.steps.push(Snapshot::new(description, Scene::Graph(scene)));
    }
}

pub fn bfs() -> Vec<Snapshot> {
    let adj = adjacency(VERTICES.len(), &EDGES, false);
    let mut rec = Recorder::new(&VERTICES, &EDGES, false, "queue");
    let start = 0;

    let mut discovered = vec![start];
    let mut seen: FxHashSet<usize> = FxHashSet::default();
    seen.insert(start);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    rec.record(
        format!("Start BFS from vertex {}", VERTICES[start]),
        &discovered,
        None,
        queue.iter().copied().collect(),
        &order,
    );

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let fresh: Vec<usize> = adj[v].iter().copied().filter(|w| seen.insert(*w)).collect();
        discovered.extend(&fresh);
        queue.extend(&fresh);

        let description = if fresh.is_empty() {
            format!("Visit vertex {} (no new neighbors to add)", VERTICES[v])
        } else {
            format!(
                "Visit vertex {} and add its unvisited neighbors ({}) to the queue",
                VERTICES[v],
                names(&VERTICES, &fresh)
            )
        };
        rec.record(description, &discovered, Some(v), queue.iter().copied().collect(), &order);
    }

    rec.record(
        format!("BFS traversal complete: {}", names(&VERTICES, &order)),
        &discovered,
        None,
        Vec::new(),
        &order,
    );
    rec.steps
}

pub fn dfs() -> Vec<Snapshot> {
    let adj = adjacency(VERTICES.len(), &EDGES, false);
    let mut rec = Recorder::new(&VERTICES, &EDGES, false, "stack");
    let start = 0;

    let mut seen: FxHashSet<usize> = FxHashSet::default();
    let mut order = Vec::new();
    rec.record(
        format!("Start DFS from vertex {}", VERTICES[start]),
        &order,
        None,
        Vec::new(),
        &order,
    );

    seen.insert(start);
    order.push(start);
    // (vertex, next neighbor to try)
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    rec.record(
        format!("Visit vertex {} and mark it as visited", VERTICES[start]),
        &order,
        Some(start),
        vec![start],
        &order,
    );

    while let Some(frame) = stack.last_mut() {
        let v = frame.0;
        if let Some(&w) = adj[v].get(frame.1) {
            frame.1 += 1;
            if seen.insert(w) {
                order.push(w);
                stack.push((w, 0));
                rec.record(
                    format!(
                        "Explore neighbor {} of {}: visit and mark it as visited",
                        VERTICES[w], VERTICES[v]
                    ),
                    &order,
                    Some(w),
                    stack.iter().map(|f| f.0).collect(),
                    &order,
                );
            }
        } else {
            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                rec.record(
                    format!(
                        "{} has no unvisited neighbors, backtrack to {}",
                        VERTICES[v], VERTICES[parent]
                    ),
                    &order,
                    Some(parent),
                    stack.iter().map(|f| f.0).collect(),
                    &order,
                );
            }
        }
    }

    rec.record(
        format!("DFS traversal complete: {}", names(&VERTICES, &order)),
        &order,
        None,
        Vec::new(),
        &order,
    );
    rec.steps
}

pub fn topological_sort() -> Vec<Snapshot> {
    let vertices: Vec<&'static str> = COURSES.iter().map(|(id, _)| *id).collect();
    let course = |v: usize| format!("{} ({})", COURSES[v].0, COURSES[v].1);
    let adj = adjacency(vertices.len(), &PREREQUISITES, true);
    let mut rec = Recorder::new(&vertices, &PREREQUISITES, true, "stack");

    let mut seen: FxHashSet<usize> = FxHashSet::default();
    let mut visited = Vec::new();
    let mut finished = Vec::new();
    rec.record(
        "Start DFS-based topological sort on the course prerequisites graph".to_string(),
        &visited,
        None,
        Vec::new(),
        &finished,
    );

    for root in 0..vertices.len() {
        if !seen.insert(root) {
            continue;
        }
        visited.push(root);
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        rec.record(
            format!("Visit course {} and explore the courses that depend on it", course(root)),
            &visited,
            Some(root),
            vec![root],
            &finished,
        );

        while let Some(frame) = stack.last_mut() {
            let v = frame.0;
            if let Some(&w) = adj[v].get(frame.1) {
                frame.1 += 1;
                if seen.insert(w) {
                    visited.push(w);
                    stack.push((w, 0));
                    rec.record(
                        format!("Visit course {} from {}", course(w), vertices[v]),
                        &visited,
                        Some(w),
                        stack.iter().map(|f| f.0).collect(),
                        &finished,
                    );
                } else {
                    rec.record(
                        format!("{} was already visited, skip it", course(w)),
                        &visited,
                        Some(v),
                        stack.iter().map(|f| f.0).collect(),
                        &finished,
                    );
                }
            } else {
                stack.pop();
                finished.push(v);
                rec.record(
                    format!("All dependents of {} are processed, add it to the result", vertices[v]),
                    &visited,
                    None,
                    stack.iter().map(|f| f.0).collect(),
                    &finished,
                );
            }
        }
    }

    let mut topo = finished.clone();
    topo.reverse();
    rec.record(
        format!("Topological order: {}", names(&vertices, &topo)),
        &visited,
        None,
        Vec::new(),
        &topo,
    );
    rec.steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(step: &Snapshot) -> &GraphScene {
        match &step.scene {
            Scene::Graph(g) => g,
            other => panic!("unexpected scene {:?}", other),
        }
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        let steps = bfs();
        assert_eq!(steps.len(), 10);
        let last = graph(steps.last().unwrap());
        assert_eq!(names(&VERTICES, &last.order), "A, B, C, D, E, F, G, H");
        assert_eq!(graph(&steps[1]).frontier, vec![1, 2, 3]);
    }

    #[test]
    fn test_dfs_order() {
        let steps = dfs();
        let last = graph(steps.last().unwrap());
        assert_eq!(names(&VERTICES, &last.order), "A, B, E, F, C, G, D, H");
        assert!(last.frontier.is_empty());
    }

    #[test]
    fn test_topological_order_respects_prerequisites() {
        let steps = topological_sort();
        let order = graph(steps.last().unwrap()).order.clone();
        assert_eq!(order.len(), COURSES.len());
        let position = |v: usize| order.iter().position(|&x| x == v).unwrap();
        for (before, after) in PREREQUISITES {
            assert!(position(before) < position(after));
        }
    }
}

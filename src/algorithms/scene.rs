//! Snapshot payloads recorded by the algorithm generators.
//!
//! The playback engine never looks inside these; only the UI panes do.

/// How an array cell should be drawn in a given snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Being compared or inspected
    Active,
    /// Taking part in a swap
    Swap,
    /// In its final position, or the element that was found
    Done,
    /// Outside the current search window
    Dimmed,
}

/// Array contents with per-cell marks and named pointers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayScene {
    pub values: Vec<i64>,
    pub marks: Vec<(usize, Mark)>,
    pub pointers: Vec<(&'static str, usize)>,
    /// Secondary array (counts, prefix sums, output)
    pub aux: Option<(&'static str, Vec<i64>)>,
}

impl ArrayScene {
    pub fn new(values: &[i64]) -> Self {
        ArrayScene {
            values: values.to_vec(),
            ..Self::default()
        }
    }

    pub fn mark(mut self, index: usize, mark: Mark) -> Self {
        self.marks.push((index, mark));
        self
    }

    pub fn pointer(mut self, name: &'static str, index: usize) -> Self {
        self.pointers.push((name, index));
        self
    }

    pub fn aux(mut self, label: &'static str, values: Vec<i64>) -> Self {
        self.aux = Some((label, values));
        self
    }

    /// Mark for a cell; later marks win
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.marks
            .iter()
            .rev()
            .find(|(i, _)| *i == index)
            .map(|(_, m)| *m)
    }
}

/// Node of a binary tree stored in an arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Binary tree (BST or heap) with the nodes visited so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeScene {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
    pub path: Vec<usize>,
    pub active: Option<usize>,
    pub found: Option<usize>,
}

impl TreeScene {
    /// Lay out a binary heap array as a complete tree
    pub fn from_heap(values: &[i64]) -> Self {
        let len = values.len();
        let child = |i: usize| (i < len).then_some(i);
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, &value)| TreeNode {
                value,
                left: child(2 * i + 1),
                right: child(2 * i + 2),
            })
            .collect();
        TreeScene {
            nodes,
            root: (len > 0).then_some(0),
            path: Vec::new(),
            active: None,
            found: None,
        }
    }

    /// Node indices level by level from the root
    pub fn levels(&self) -> Vec<Vec<usize>> {
        let mut levels = Vec::new();
        let mut current: Vec<usize> = self.root.into_iter().collect();
        while !current.is_empty() {
            let next = current
                .iter()
                .flat_map(|&i| [self.nodes[i].left, self.nodes[i].right])
                .flatten()
                .collect();
            levels.push(std::mem::replace(&mut current, next));
        }
        levels
    }
}

/// Traversal state over a small labelled graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphScene {
    pub vertices: Vec<&'static str>,
    /// Undirected edges, or dependency edges `(from, to)` for a DAG
    pub edges: Vec<(usize, usize)>,
    pub directed: bool,
    pub visited: Vec<usize>,
    pub active: Option<usize>,
    /// Queue (BFS) or stack (DFS), front first
    pub frontier: Vec<usize>,
    pub frontier_label: &'static str,
    /// Visit order, or finishing order for a topological sort
    pub order: Vec<usize>,
}

/// One bit operation applied to an 8-bit value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitScene {
    pub operation: &'static str,
    pub value: u8,
    pub highlight: u8,
    pub result: String,
    pub expression: Option<String>,
}

/// A half-open time interval used by the activity selection walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: usize,
    pub start: u32,
    pub finish: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityScene {
    /// Activities sorted by finish time
    pub activities: Vec<Activity>,
    pub selected: Vec<usize>,
    pub rejected: Vec<usize>,
    pub current: Option<usize>,
    pub last_finish: Option<u32>,
}

/// What a snapshot shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    Array(ArrayScene),
    Tree(TreeScene),
    Graph(GraphScene),
    Bits(BitScene),
    Activities(ActivityScene),
}

/// One recorded state of an algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub description: String,
    pub scene: Scene,
}

impl Snapshot {
    pub fn new(description: impl Into<String>, scene: Scene) -> Self {
        Snapshot {
            description: description.into(),
            scene,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_levels() {
        let tree = TreeScene::from_heap(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(tree.levels(), vec![vec![0], vec![1, 2], vec![3, 4, 5]]);
        assert_eq!(tree.nodes[2].right, None);
        assert_eq!(tree.nodes[2].left, Some(5));
    }

    #[test]
    fn test_empty_heap_has_no_levels() {
        let tree = TreeScene::from_heap(&[]);
        assert!(tree.levels().is_empty());
    }

    #[test]
    fn test_later_mark_wins() {
        let scene = ArrayScene::new(&[1, 2])
            .mark(0, Mark::Active)
            .mark(0, Mark::Done);
        assert_eq!(scene.mark_at(0), Some(Mark::Done));
        assert_eq!(scene.mark_at(1), None);
    }
}

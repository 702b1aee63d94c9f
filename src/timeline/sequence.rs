// Precomputed step history for one algorithm run

use thiserror::Error;

/// Errors raised while assembling a [`StepSequence`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Every run must at least record its initial state
    #[error("step sequence must contain at least one step")]
    Empty,
}

/// One recorded state of an algorithm run
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    index: usize,
    state: T,
}

impl<T> Step<T> {
    /// Position of this step within its sequence (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    /// The recorded state
    pub fn state(&self) -> &T {
        &self.state
    }
}

/// Immutable, non-empty, ordered list of steps.
///
/// Built once when an algorithm is selected; switching algorithms builds a
/// new sequence instead of mutating this one.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSequence<T> {
    steps: Vec<Step<T>>,
}

impl<T> StepSequence<T> {
    /// Wrap recorded states, assigning each its index.
    pub fn new(states: Vec<T>) -> Result<Self, SequenceError> {
        if states.is_empty() {
            return Err(SequenceError::Empty);
        }

        let steps = states
            .into_iter()
            .enumerate()
            .map(|(index, state)| Step { index, state })
            .collect();

        Ok(StepSequence { steps })
    }

    /// Sequence holding exactly one step
    pub fn single(state: T) -> Self {
        StepSequence {
            steps: vec![Step { index: 0, state }],
        }
    }

    /// Number of steps, always at least 1
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step<T>> {
        self.steps.get(index)
    }

    /// Clamp an arbitrary (possibly negative) position into `[0, last_index]`
    pub fn clamp_index(&self, target: i64) -> usize {
        if target <= 0 {
            0
        } else {
            usize::try_from(target)
                .unwrap_or(usize::MAX)
                .min(self.last_index())
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step<T>> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        let result = StepSequence::<u8>::new(Vec::new());
        assert_eq!(result, Err(SequenceError::Empty));
    }

    #[test]
    fn test_indices_assigned_in_order() {
        let seq = StepSequence::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.last_index(), 2);
        for (i, step) in seq.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(seq.get(1).map(|s| *s.state()), Some("b"));
        assert!(seq.get(3).is_none());
    }

    #[test]
    fn test_clamp_index() {
        let seq = StepSequence::new(vec![0; 8]).unwrap();
        assert_eq!(seq.clamp_index(-5), 0);
        assert_eq!(seq.clamp_index(0), 0);
        assert_eq!(seq.clamp_index(4), 4);
        assert_eq!(seq.clamp_index(999), 7);
        assert_eq!(seq.clamp_index(i64::MAX), 7);
        assert_eq!(seq.clamp_index(i64::MIN), 0);
    }

    #[test]
    fn test_single_step_sequence() {
        let seq = StepSequence::single(());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last_index(), 0);
        assert_eq!(seq.clamp_index(3), 0);
    }
}

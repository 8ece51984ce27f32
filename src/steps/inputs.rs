//! Links from calculus steps to the number inputs they read.
//!
//! A calculus step never stores numbers. It stores [`StepId`] handles that
//! point at number-input steps earlier in the same flow, and looks the
//! current values up through an [`InputRegistry`] each time it runs.

use std::fmt;

use super::Step;

/// Stable handle to a step within one flow.
///
/// Handles are positions in the flow's step sequence. Steps are only ever
/// appended, so a handle stays valid for as long as the flow exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(usize);

impl StepId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the step in its flow.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// Read-only view of the steps that precede the one being executed.
#[derive(Debug, Clone, Copy)]
pub struct InputRegistry<'a> {
    steps: &'a [Step],
}

impl<'a> InputRegistry<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        Self { steps }
    }

    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self { steps: &[] }
    }

    /// Latest value of the number input at `id`.
    ///
    /// `None` when the handle is outside this view or names a step of
    /// another kind.
    pub fn value(&self, id: StepId) -> Option<f64> {
        self.steps.get(id.index()).and_then(Step::number_value)
    }

    /// Resolve several handles at once, failing on the first miss.
    pub fn values(&self, ids: &[StepId]) -> Result<Vec<f64>, StepId> {
        ids.iter()
            .map(|&id| self.value(id).ok_or(id))
            .collect()
    }
}

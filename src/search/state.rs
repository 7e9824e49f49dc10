// src/search/state.rs

use std::collections::BTreeSet;
use std::fmt;

use crate::dag::{START_ID, TaskId, TaskRegistry};

/// Cumulative value/time totals of a state, recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub value: u32,
    pub time: u32,
}

/// One node of the state-space tree.
///
/// Holds the ordered sequence of task ids chosen so far, plus an ordered
/// member set for O(1)-ish membership checks and canonical-key derivation.
/// Invariant: the sequence is precedence-valid and duplicate-free. Cumulative
/// totals are always derived from the registry, never cached.
///
/// Immutable once created; states are only created during tree construction.
#[derive(Debug, Clone)]
pub struct State {
    id: usize,
    task_id: TaskId,
    depth: usize,
    sequence: Vec<TaskId>,
    members: BTreeSet<TaskId>,
}

impl State {
    /// The root state: empty sequence at depth 0, marked with the start
    /// sentinel.
    pub fn root() -> Self {
        Self {
            id: 0,
            task_id: START_ID,
            depth: 0,
            sequence: Vec::new(),
            members: BTreeSet::new(),
        }
    }

    /// Derive a child state by appending one task.
    pub fn child(&self, id: usize, task_id: TaskId) -> Self {
        let mut sequence = self.sequence.clone();
        sequence.push(task_id);
        let mut members = self.members.clone();
        members.insert(task_id);
        Self {
            id,
            task_id,
            depth: self.depth + 1,
            sequence,
            members,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The task appended by this state, or [`START_ID`] for the root.
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Depth in the tree; equals the sequence length.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sequence(&self) -> &[TaskId] {
        &self.sequence
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.members.contains(&id)
    }

    /// Canonical dedup key: the task ids sorted ascending. Permutations of
    /// the same task set collide to the same key.
    pub fn canonical_key(&self) -> Vec<TaskId> {
        self.members.iter().copied().collect()
    }

    /// Sum value and time over every task in the sequence. The root returns
    /// zero totals.
    pub fn cumulative_totals(&self, registry: &TaskRegistry) -> Totals {
        let mut totals = Totals::default();
        for task in self.sequence.iter().filter_map(|id| registry.get(*id)) {
            totals.value += task.value;
            totals.time += task.time;
        }
        totals
    }

    /// Cost-only feasibility filter: cumulative time within the deadline.
    ///
    /// Deliberately blind to value. Value is monotone along a path, so a
    /// low-value prefix can still reach the target; an over-deadline prefix
    /// never can.
    pub fn is_within_deadline(&self, registry: &TaskRegistry, deadline: u32) -> bool {
        self.cumulative_totals(registry).time <= deadline
    }
}

impl fmt::Display for State {
    /// The sequence's task ids, concatenated without separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in &self.sequence {
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

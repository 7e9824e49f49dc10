// src/dag/task.rs

use std::collections::HashMap;

/// Task identifier.
///
/// Real tasks use non-negative ids; negative ids are reserved for sentinels
/// like [`START_ID`] and never appear inside a sequence.
pub type TaskId = i32;

/// Sentinel id marking the root of the state-space tree.
pub const START_ID: TaskId = -1;

/// Immutable task value object: an id, a reward value and a time cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub value: u32,
    pub time: u32,
}

impl Task {
    pub fn new(id: TaskId, value: u32, time: u32) -> Self {
        Self { id, value, time }
    }
}

/// Owns all real tasks for one run.
///
/// Iteration order is insertion order; tree construction generates children in
/// this order, so keeping it stable keeps runs deterministic. Lookup by id is
/// O(1).
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    order: Vec<TaskId>,
    by_id: HashMap<TaskId, Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut registry = Self::new();
        for task in tasks {
            registry.insert(task);
        }
        registry
    }

    /// Register a task. Ids are unique by precondition; re-inserting an id
    /// replaces the stored task without changing iteration order.
    pub fn insert(&mut self, task: Task) {
        if self.by_id.insert(task.id, task).is_none() {
            self.order.push(task.id);
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.by_id.get(&id)
    }

    /// Tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

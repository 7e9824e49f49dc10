// src/dag/graph.rs

use std::collections::HashMap;

use crate::dag::task::{TaskId, TaskRegistry};

/// Internal node structure: stores direct predecessors.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Direct predecessors: tasks that must appear earlier in any sequence.
    preds: Vec<TaskId>,
}

/// Precedence DAG over tasks, keyed by task id.
///
/// Built once from a flat list of `(predecessor, successor)` pairs and never
/// mutated afterwards. Acyclicity is an unchecked precondition: no detection
/// is performed, and pairs referencing unregistered ids are silently dropped.
/// Queries on unknown ids return empty slices.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: HashMap<TaskId, DagNode>,
}

impl DependencyGraph {
    /// Build the DAG: one vertex per registered task, one directed edge per
    /// `(predecessor, successor)` pair.
    pub fn build(registry: &TaskRegistry, pairs: &[(TaskId, TaskId)]) -> Self {
        let mut nodes: HashMap<TaskId, DagNode> = HashMap::new();

        for task in registry.iter() {
            nodes.insert(task.id, DagNode::default());
        }

        for &(pred, succ) in pairs {
            if !nodes.contains_key(&pred) {
                continue;
            }
            if let Some(node) = nodes.get_mut(&succ) {
                node.preds.push(pred);
            }
        }

        Self { nodes }
    }

    /// Direct predecessors of a task.
    pub fn predecessors_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.preds.as_slice())
            .unwrap_or(&[])
    }

    /// Number of direct predecessors.
    pub fn in_degree(&self, id: TaskId) -> usize {
        self.predecessors_of(id).len()
    }
}

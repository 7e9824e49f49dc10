#![allow(dead_code)]

use plandag::dag::{DependencyGraph, Task, TaskId, TaskRegistry};
use plandag::input::parser::Instance;
use plandag::search::{Goal, StateSpaceTree};

/// Build an instance from compact tuples: `(id, value, time)` per task,
/// `(predecessor, successor)` per dependency, `(target_value, deadline)`.
pub fn instance(
    tasks: &[(TaskId, u32, u32)],
    deps: &[(TaskId, TaskId)],
    target: (u32, u32),
    max_frontier_size: usize,
) -> Instance {
    Instance {
        tasks: tasks
            .iter()
            .map(|&(id, value, time)| Task::new(id, value, time))
            .collect(),
        goal: Goal::new(target.0, target.1),
        max_frontier_size,
        deps: deps.to_vec(),
    }
}

/// Materialize the registry and state-space tree for an instance.
pub fn build_tree(instance: &Instance) -> (TaskRegistry, StateSpaceTree) {
    let registry = TaskRegistry::from_tasks(instance.tasks.iter().copied());
    let graph = DependencyGraph::build(&registry, &instance.deps);
    let tree = StateSpaceTree::build(&registry, &graph, instance.goal.deadline);
    (registry, tree)
}

/// All sequences present in the tree, as owned vectors.
pub fn all_sequences(tree: &StateSpaceTree) -> Vec<Vec<TaskId>> {
    tree.states().map(|s| s.sequence().to_vec()).collect()
}

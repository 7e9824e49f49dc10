// src/search/tree.rs

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::dag::{DependencyGraph, TaskId, TaskRegistry};
use crate::search::state::State;

/// The fully materialized state-space tree.
///
/// Built once, before the search starts, and read-only afterwards. Every
/// vertex is a precedence-valid, duplicate-free sequence; multiple vertices
/// may encode the same task *set* in different orders — deduplication is
/// deferred to traversal.
pub struct StateSpaceTree {
    graph: DiGraph<State, ()>,
    root: NodeIndex,
}

impl StateSpaceTree {
    /// Enumerate every precedence-valid sequence reachable from the
    /// zero-in-degree tasks, pruned by time feasibility.
    ///
    /// A candidate task is appendable under a parent iff it is not already in
    /// the parent's sequence and every direct predecessor already occurs in
    /// it. Children are admitted only while the *parent* is within the
    /// deadline, so an infeasible prefix never grows a subtree. Children are
    /// generated in registry iteration order.
    pub fn build(registry: &TaskRegistry, deps: &DependencyGraph, deadline: u32) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(State::root());
        let mut tree = Self { graph, root };

        let mut frontier: VecDeque<NodeIndex> = VecDeque::new();

        // Seed: one child per task with no prerequisites.
        for task in registry.iter() {
            if deps.in_degree(task.id) == 0 {
                let child = tree.add_child(root, task.id);
                frontier.push_back(child);
            }
        }

        while let Some(parent) = frontier.pop_front() {
            if !tree.graph[parent].is_within_deadline(registry, deadline) {
                // Prunes the whole subtree rooted at this prefix.
                continue;
            }

            for task in registry.iter() {
                let parent_state = &tree.graph[parent];
                if parent_state.contains(task.id) {
                    continue;
                }
                let appendable = deps
                    .predecessors_of(task.id)
                    .iter()
                    .all(|pred| parent_state.contains(*pred));
                if !appendable {
                    continue;
                }
                let child = tree.add_child(parent, task.id);
                frontier.push_back(child);
            }
        }

        debug!(states = tree.node_count(), "state-space tree constructed");
        tree
    }

    fn add_child(&mut self, parent: NodeIndex, task_id: TaskId) -> NodeIndex {
        let state = self.graph[parent].child(self.graph.node_count(), task_id);
        let child = self.graph.add_node(state);
        self.graph.add_edge(parent, child, ());
        child
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn state(&self, index: NodeIndex) -> &State {
        &self.graph[index]
    }

    /// Children of a vertex, in the order they were generated.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        // petgraph iterates neighbors newest-first; restore insertion order.
        let mut children: Vec<NodeIndex> = self.graph.neighbors(index).collect();
        children.reverse();
        children
    }

    /// Total number of states, root included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// All states in the tree, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.graph.node_weights()
    }
}

// src/search/hybrid.rs

use std::collections::{HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::{debug, info};

use crate::dag::{TaskId, TaskRegistry};
use crate::search::Goal;
use crate::search::state::State;
use crate::search::tree::StateSpaceTree;
use crate::stats::RunStats;

/// Failure token reported when no qualifying state exists.
pub const FAILURE_RESULT: &str = "0";

/// How the breadth-first phase ended.
enum BfsOutcome {
    /// A qualifying state was dequeued; the search is over.
    GoalFound(NodeIndex),
    /// The frontier drained without a hit: the tree is fully explored and no
    /// second phase runs.
    Exhausted,
    /// Admitting one more child would have pushed the frontier past the cap.
    /// Carries the unconsumed frontier for the deepening phase.
    FrontierFull(VecDeque<NodeIndex>),
}

/// How the iterative-deepening phase ended.
enum IdsOutcome {
    GoalFound(NodeIndex),
    /// Every depth limit up to the task count was tried without a hit.
    DepthExhausted,
}

/// Hybrid traversal over a pre-built state-space tree.
///
/// Level-order BFS finds shallow qualifying sequences cheaply; once branching
/// pushes the frontier past `max_frontier_size`, a single depth-first fringe
/// with iterative deepening bounds memory while staying complete up to the
/// maximum tree depth. First qualifying state wins; the search is not
/// optimal by construction.
///
/// One instance serves exactly one run; the dedup set and frontier/fringe are
/// exclusively owned and discarded afterwards.
pub struct HybridSearch<'a> {
    registry: &'a TaskRegistry,
    tree: &'a StateSpaceTree,
    goal: Goal,
    max_frontier_size: usize,
    /// Canonical keys of sequences already admitted into a frontier; shared
    /// by both phases and by every deepening pass.
    visited: HashSet<Vec<TaskId>>,
}

impl<'a> HybridSearch<'a> {
    pub fn new(
        registry: &'a TaskRegistry,
        tree: &'a StateSpaceTree,
        goal: Goal,
        max_frontier_size: usize,
    ) -> Self {
        Self {
            registry,
            tree,
            goal,
            max_frontier_size,
            visited: HashSet::new(),
        }
    }

    /// Run both phases to completion and report statistics.
    ///
    /// Always returns a fully populated [`RunStats`]: either a formatted
    /// success result or the failure token, never a panic on an unsuccessful
    /// search.
    pub fn run(mut self) -> RunStats {
        let goal_state = match self.run_bfs() {
            BfsOutcome::GoalFound(index) => Some(index),
            BfsOutcome::Exhausted => None,
            BfsOutcome::FrontierFull(frontier) => match self.run_ids(frontier) {
                IdsOutcome::GoalFound(index) => Some(index),
                IdsOutcome::DepthExhausted => None,
            },
        };

        self.finish(goal_state)
    }

    /// Bounded breadth-first phase, starting from the tree root.
    fn run_bfs(&mut self) -> BfsOutcome {
        let mut frontier: VecDeque<NodeIndex> = VecDeque::new();
        frontier.push_back(self.tree.root());

        while let Some(index) = frontier.pop_front() {
            if self.is_goal_reached(self.tree.state(index)) {
                info!(state = %self.tree.state(index), "goal reached during BFS");
                return BfsOutcome::GoalFound(index);
            }

            for child in self.tree.children(index) {
                let key = self.tree.state(child).canonical_key();
                if self.visited.contains(&key) {
                    continue;
                }
                if frontier.len() >= self.max_frontier_size {
                    // Admitting this child would exceed the cap: stop
                    // expanding and hand the frontier over unconsumed.
                    debug!(
                        frontier = frontier.len(),
                        cap = self.max_frontier_size,
                        "frontier full; switching to iterative deepening"
                    );
                    return BfsOutcome::FrontierFull(frontier);
                }
                self.visited.insert(key);
                frontier.push_back(child);
            }
        }

        debug!("BFS exhausted the frontier without reaching the goal");
        BfsOutcome::Exhausted
    }

    /// Iterative-deepening phase over the frontier BFS left behind.
    ///
    /// The frontier is drained once into a stack, reversing FIFO order so the
    /// most recently queued states are explored first. Each depth pass
    /// restarts from that snapshot; a popped state at exactly the depth limit
    /// is not expanded. Dedup carries over from BFS and across passes.
    fn run_ids(&mut self, frontier: VecDeque<NodeIndex>) -> IdsOutcome {
        let snapshot: Vec<NodeIndex> = frontier.into_iter().collect();

        for depth_limit in 0..=self.registry.len() {
            debug!(depth_limit, "starting depth-limited pass");
            let mut fringe = snapshot.clone();

            while let Some(index) = fringe.pop() {
                let state = self.tree.state(index);
                if self.is_goal_reached(state) {
                    info!(state = %state, depth_limit, "goal reached during iterative deepening");
                    return IdsOutcome::GoalFound(index);
                }
                if state.depth() == depth_limit {
                    continue;
                }
                for child in self.tree.children(index) {
                    let key = self.tree.state(child).canonical_key();
                    if self.visited.insert(key) {
                        fringe.push(child);
                    }
                }
            }
        }

        debug!("all depth limits exhausted without reaching the goal");
        IdsOutcome::DepthExhausted
    }

    /// Pure goal test: cumulative value at target or above, cumulative time
    /// within the deadline. Independent of traversal order or phase.
    fn is_goal_reached(&self, state: &State) -> bool {
        let totals = state.cumulative_totals(self.registry);
        totals.value >= self.goal.value && totals.time <= self.goal.deadline
    }

    fn finish(self, goal_state: Option<NodeIndex>) -> RunStats {
        let (result, success) = match goal_state {
            Some(index) => {
                let state = self.tree.state(index);
                let totals = state.cumulative_totals(self.registry);
                (format!("[{state}] {} {}", totals.value, totals.time), true)
            }
            None => (FAILURE_RESULT.to_string(), false),
        };

        RunStats {
            result,
            success,
            number_of_states: self.tree.node_count(),
            number_of_frontier_states: self.visited.len(),
        }
    }
}

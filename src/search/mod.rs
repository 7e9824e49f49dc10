// src/search/mod.rs

//! State-space enumeration and the hybrid search over it.
//!
//! - [`state`] is one node of the search tree: an ordered, duplicate-free task
//!   sequence with derived cumulative totals.
//! - [`tree`] eagerly materializes every precedence-valid sequence, pruned by
//!   time feasibility.
//! - [`hybrid`] runs bounded breadth-first search and, when the frontier cap
//!   is hit, falls back to iterative-deepening depth-first search.

pub mod hybrid;
pub mod state;
pub mod tree;

pub use hybrid::HybridSearch;
pub use state::{State, Totals};
pub use tree::StateSpaceTree;

/// Goal specification: minimum cumulative value, maximum cumulative time.
///
/// A state qualifies iff its cumulative value is at least `value` *and* its
/// cumulative time is at most `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub value: u32,
    pub deadline: u32,
}

impl Goal {
    pub fn new(value: u32, deadline: u32) -> Self {
        Self { value, deadline }
    }
}

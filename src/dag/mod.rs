// src/dag/mod.rs

//! Tasks and the precedence DAG over them.
//!
//! - [`task`] holds the immutable task value object and the id-keyed registry.
//! - [`graph`] holds the adjacency structure built from precedence pairs.

pub mod graph;
pub mod task;

pub use graph::DependencyGraph;
pub use task::{START_ID, Task, TaskId, TaskRegistry};

// src/input/mod.rs

//! Instance input: the whitespace-integer grammar and the random generator.
//!
//! The grammar, consumed in order:
//!
//! ```text
//! numberOfTasks targetValue targetDeadline maxFrontierSize
//! <taskId> <value> <time>        (numberOfTasks times)
//! <predecessorId> <successorId>  (repeated until end of input)
//! ```
//!
//! The core accepts any input matching this grammar, whether hand-written or
//! produced by [`generator`].

pub mod generator;
pub mod parser;

pub use generator::generate_instance;
pub use parser::{Instance, parse_instance};
